//! # Form submission flows
//!
//! Each flow turns a validated [`FormSnapshot`] into a request and the response
//! into the [`Outcome`] the form engine records. Failures never escape as errors:
//! they become [`Outcome::Rejected`] carrying the server's message, if any, so
//! the form falls back to its own generic text.
//!
//! Login is split in two ([`authenticate`] then [`establish_session`]) so the
//! session is only borrowed after the request has finished.

use forms::schemas::login::MISSING_TOKEN;
use forms::{FormSnapshot, Outcome};
use store::{SessionStore, TokenStorage};

use crate::backend::SchoolBackend;
use crate::error::ApiError;
use crate::models::{ContactMessage, Credentials, SchoolRegistration};

/// A login the server accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    pub token: String,
    pub message: Option<String>,
}

/// Exchange credentials for a session token.
pub async fn authenticate<B: SchoolBackend>(
    backend: &B,
    credentials: &Credentials,
) -> Result<SignedIn, ApiError> {
    let response = backend.login(credentials).await?;
    let token = response.token().ok_or(ApiError::MissingToken)?.to_string();
    Ok(SignedIn {
        token,
        message: response.message.filter(|m| !m.trim().is_empty()),
    })
}

/// Record the result of [`authenticate`] in the session.
pub fn establish_session<S: TokenStorage>(
    session: &mut SessionStore<S>,
    result: Result<SignedIn, ApiError>,
) -> Outcome {
    match result {
        Ok(signed_in) => match session.login(&signed_in.token) {
            Ok(()) => Outcome::Accepted(signed_in.message),
            Err(e) => {
                tracing::error!("Failed to persist session token: {e}");
                Outcome::Rejected(None)
            }
        },
        Err(ApiError::MissingToken) => {
            tracing::warn!("Login response carried no token");
            Outcome::Rejected(Some(MISSING_TOKEN.to_string()))
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Outcome::Rejected(e.server_message().map(str::to_string))
        }
    }
}

pub async fn submit_registration<B: SchoolBackend>(backend: &B, snapshot: &FormSnapshot) -> Outcome {
    let registration = match SchoolRegistration::try_from(snapshot) {
        Ok(registration) => registration,
        Err(e) => {
            tracing::error!("Registration snapshot did not convert: {e}");
            return Outcome::Rejected(None);
        }
    };
    settle("Registration", backend.register_school(&registration).await)
}

pub async fn submit_contact<B: SchoolBackend>(backend: &B, snapshot: &FormSnapshot) -> Outcome {
    settle("Contact", backend.send_contact(&ContactMessage::from(snapshot)).await)
}

fn settle(what: &str, result: Result<Option<String>, ApiError>) -> Outcome {
    match result {
        Ok(message) => {
            tracing::info!("{what} submitted");
            Outcome::Accepted(message)
        }
        Err(e) => {
            tracing::warn!("{what} failed: {e}");
            Outcome::Rejected(e.server_message().map(str::to_string))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockBackend};
    use forms::schemas::{contact, login};
    use forms::{FormState, SubmitStatus};
    use serde_json::json;
    use store::{GuardState, MemoryStore, RouteGuard};

    fn login_form(username: &str, password: &str) -> FormState {
        let mut form = FormState::new(&login::SCHEMA);
        form.set_text(login::USERNAME, username).unwrap();
        form.set_text(login::PASSWORD, password).unwrap();
        form
    }

    #[tokio::test]
    async fn test_login_authorizes_session() {
        let backend = MockBackend::ok(json!({ "success": true, "results": { "token": "abc" } }));
        let storage = MemoryStore::new();
        let mut session = SessionStore::new(storage.clone());
        let mut guard = RouteGuard::new();
        assert_eq!(guard.observe(&session), GuardState::Loading);

        let mut form = login_form("u", "p");
        let snapshot = form.begin_submit().unwrap();
        let result = authenticate(&backend, &Credentials::from(&snapshot)).await;
        form.complete(establish_session(&mut session, result));

        assert_eq!(session.token(), Some("abc"));
        assert_eq!(storage.load().unwrap().as_deref(), Some("abc"));
        assert_eq!(guard.observe(&session), GuardState::Authorized);
        assert_eq!(form.success_message(), Some("تم تسجيل الدخول بنجاح"));
        assert_eq!(
            backend.calls(),
            vec![Call::Login(Credentials::new("u", "p"))]
        );
    }

    #[tokio::test]
    async fn test_login_without_token_reports_structure() {
        let backend = MockBackend::ok(json!({ "success": true, "results": {} }));
        let mut session = SessionStore::new(MemoryStore::new());
        session.hydrate();

        let mut form = login_form("u", "p");
        let snapshot = form.begin_submit().unwrap();
        let result = authenticate(&backend, &Credentials::from(&snapshot)).await;
        form.complete(establish_session(&mut session, result));

        assert!(!session.is_authenticated());
        assert_eq!(form.failure_message(), Some(MISSING_TOKEN));
    }

    #[tokio::test]
    async fn test_login_refusal_shows_server_message() {
        let backend = MockBackend::status(401, json!({ "message": "بيانات الدخول غير صحيحة" }));
        let mut session = SessionStore::new(MemoryStore::new());

        let mut form = login_form("u", "wrong");
        let snapshot = form.begin_submit().unwrap();
        let result = authenticate(&backend, &Credentials::from(&snapshot)).await;
        form.complete(establish_session(&mut session, result));

        assert_eq!(form.failure_message(), Some("بيانات الدخول غير صحيحة"));
        assert_eq!(form.text(login::USERNAME), "u");
    }

    #[tokio::test]
    async fn test_contact_failure_without_message_uses_fallback() {
        let backend = MockBackend::status(500, json!("upstream down"));
        let mut form = FormState::new(&contact::SCHEMA);
        form.set_text(contact::NAME, "Ali").unwrap();
        form.set_text(contact::EMAIL, "ali@example.com").unwrap();
        form.set_text(contact::MESSAGE, " Hello ").unwrap();

        let snapshot = form.begin_submit().unwrap();
        form.complete(submit_contact(&backend, &snapshot).await);

        assert_eq!(
            form.status(),
            &SubmitStatus::Failed("An error occurred while sending your message.".to_string())
        );
        assert_eq!(
            backend.calls(),
            vec![Call::Contact(ContactMessage {
                name: "Ali".to_string(),
                email: "ali@example.com".to_string(),
                message: "Hello".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_registration_success_uses_server_message() {
        use forms::schemas::registration as f;
        use forms::{FileHandle, YesNo};

        let backend = MockBackend::ok(json!({ "message": "تم استلام الطلب" }));
        let mut form = FormState::new(&f::SCHEMA);
        for (name, value) in [
            (f::SCHOOL_NAME, "مدرسة النور"),
            (f::CITY, "Jeddah"),
            (f::CONTRACT_MANAGER_NAME, "Sara"),
            (f::PHONE_NUMBER, "551234567"),
            (f::EMAIL, "noor@example.com"),
        ] {
            form.set_text(name, value).unwrap();
        }
        for name in f::STUDENT_COUNTS {
            form.set_text(name, "3").unwrap();
        }
        form.set_choice(f::HAS_COMPUTER_LAB, Some(YesNo::No)).unwrap();
        form.set_choice(f::HAS_INTERNET, Some(YesNo::Yes)).unwrap();
        let doc = FileHandle::new("id.pdf", Some("application/pdf".to_string()), vec![9]);
        form.set_file(f::COMMERCIAL_REGISTRATION, Some(doc.clone())).unwrap();
        form.set_file(f::CONTRACT_MANAGER_ID, Some(doc)).unwrap();

        let snapshot = form.begin_submit().unwrap();
        form.complete(submit_registration(&backend, &snapshot).await);

        assert_eq!(form.success_message(), Some("تم استلام الطلب"));
        assert_eq!(form.text(f::CITY), "");
        assert_eq!(backend.calls(), vec![Call::Register("مدرسة النور".to_string())]);
    }
}
