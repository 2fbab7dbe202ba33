use dioxus::prelude::*;
use forms::schemas::contact;
use ui::{use_backend, use_form, SubmitStatusAlert, TextField};

#[component]
pub fn Contact() -> Element {
    let backend = use_backend();
    let mut form = use_form(&contact::SCHEMA);

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(snapshot) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let outcome = api::submit_contact(&backend, &snapshot).await;
            form.write().complete(outcome);
        });
    };

    let submitting = form.read().is_submitting();

    rsx! {
        section {
            class: "card narrow",
            dir: "ltr",
            h1 { "Contact us" }
            form {
                onsubmit: handle_send,
                novalidate: true,
                SubmitStatusAlert { form }
                TextField { form, name: contact::NAME, label: "Name" }
                TextField { form, name: contact::EMAIL, label: "Email", input_type: "email" }
                TextField { form, name: contact::MESSAGE, label: "Message", multiline: true }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Sending..." } else { "Send" }
                }
            }
        }
    }
}
