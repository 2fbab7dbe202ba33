//! Login page view with username/password form.

use api::models::Credentials;
use dioxus::prelude::*;
use forms::schemas::login;
use ui::{use_backend, use_form, use_session, Spinner, SubmitStatusAlert, TextField};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let backend = use_backend();
    let nav = use_navigator();
    let mut form = use_form(&login::SCHEMA);

    // Already signed in (or just signed in): go to the directory
    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Schools {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let snapshot = match form.write().begin_submit() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!("Login not sent: {e}");
                return;
            }
        };
        let backend = backend.clone();
        spawn(async move {
            let result = api::authenticate(&backend, &Credentials::from(&snapshot)).await;
            let outcome = api::establish_session(&mut *session.write(), result);
            form.write().complete(outcome);
        });
    };

    if session.read().is_loading() {
        return rsx! { Spinner {} };
    }

    let submitting = form.read().is_submitting();

    rsx! {
        section {
            class: "card narrow",
            h1 { "تسجيل الدخول" }
            form {
                onsubmit: handle_login,
                novalidate: true,
                SubmitStatusAlert { form }
                TextField { form, name: login::USERNAME, label: "اسم المستخدم" }
                TextField { form, name: login::PASSWORD, label: "كلمة المرور", input_type: "password" }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "جاري تسجيل الدخول..." } else { "دخول" }
                }
            }
        }
    }
}
