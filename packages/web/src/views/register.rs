//! School registration form.

use dioxus::prelude::*;
use forms::schemas::registration as f;
use ui::{use_backend, use_form, ChoiceField, FileField, SubmitStatusAlert, TextField};

/// Student-count inputs with their labels, in display order.
const COUNT_LABELS: [(&str, &str); 6] = [
    (f::KINDERGARTEN_STUDENTS, "عدد الطلاب في الروضة"),
    (f::PRIMARY_1_TO_4_STUDENTS, "عدد الطلبة من أولى إلى رابع ابتدائي"),
    (f::PRIMARY_5_TO_6_STUDENTS, "عدد الطلبة خامس وسادس ابتدائي"),
    (f::INTERMEDIATE_1_TO_2_STUDENTS, "عدد الطلبة أولى وثاني متوسط"),
    (f::INTERMEDIATE_3_STUDENTS, "عدد الطلبة ثالث متوسط"),
    (f::SECONDARY_STUDENTS, "عدد الطلاب للمرحلة الثانوية"),
];

#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let mut form = use_form(&f::SCHEMA);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let snapshot = match form.write().begin_submit() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!("Registration not sent: {e}");
                return;
            }
        };
        let backend = backend.clone();
        spawn(async move {
            let outcome = api::submit_registration(&backend, &snapshot).await;
            form.write().complete(outcome);
        });
    };

    let submitting = form.read().is_submitting();

    rsx! {
        section {
            class: "card",
            h1 { "تسجيل مدرسة" }
            form {
                onsubmit: handle_register,
                novalidate: true,
                SubmitStatusAlert { form }

                fieldset {
                    legend { "بيانات المدرسة" }
                    TextField { form, name: f::SCHOOL_NAME, label: "اسم المدرسة" }
                    TextField { form, name: f::CITY, label: "المدينة" }
                    TextField { form, name: f::CONTRACT_MANAGER_NAME, label: "اسم المسؤول" }
                    TextField {
                        form,
                        name: f::PHONE_NUMBER,
                        label: "رقم الجوال",
                        input_type: "tel",
                        placeholder: "05XXXXXXXX",
                    }
                    TextField { form, name: f::EMAIL, label: "البريد الإلكتروني", input_type: "email" }
                }

                fieldset {
                    legend { "أعداد الطلاب" }
                    for (name, label) in COUNT_LABELS {
                        TextField {
                            key: "{name}",
                            form,
                            name,
                            label: label.to_string(),
                            input_type: "number",
                        }
                    }
                }

                fieldset {
                    legend { "التجهيزات" }
                    ChoiceField { form, name: f::HAS_COMPUTER_LAB, label: "هل يوجد معمل حاسب؟" }
                    ChoiceField { form, name: f::HAS_INTERNET, label: "هل يتوفر اتصال بالإنترنت؟" }
                }

                fieldset {
                    legend { "المستندات" }
                    FileField {
                        form,
                        name: f::COMMERCIAL_REGISTRATION,
                        label: "السجل التجاري",
                        accept: f::ACCEPTED_DOCUMENTS.to_string(),
                    }
                    FileField {
                        form,
                        name: f::CONTRACT_MANAGER_ID,
                        label: "هوية المسؤول",
                        accept: f::ACCEPTED_DOCUMENTS.to_string(),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "button button-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "جاري الإرسال..." } else { "إرسال الطلب" }
                    }
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| form.write().reset(),
                        "إعادة تعيين"
                    }
                }
            }
        }
    }
}
