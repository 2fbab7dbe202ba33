//! Login request and response bodies.

use serde::{Deserialize, Serialize};

use forms::FormSnapshot;
use forms::schemas::login;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&FormSnapshot> for Credentials {
    fn from(snapshot: &FormSnapshot) -> Self {
        // Passwords are sent as typed; only the username is trimmed.
        let password = match snapshot.value(login::PASSWORD) {
            Some(forms::FieldValue::Text(p)) => p.clone(),
            _ => String::new(),
        };
        Self::new(snapshot.text(login::USERNAME), password)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<LoginResults>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResults {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

impl LoginResponse {
    /// The session token, only when the server reported success and sent a non-blank one.
    pub fn token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.results
            .as_ref()?
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_requires_success() {
        let ok: LoginResponse =
            serde_json::from_value(json!({ "success": true, "results": { "token": "abc" } })).unwrap();
        assert_eq!(ok.token(), Some("abc"));

        let refused: LoginResponse =
            serde_json::from_value(json!({ "success": false, "results": { "token": "abc" } })).unwrap();
        assert_eq!(refused.token(), None);

        let blank: LoginResponse =
            serde_json::from_value(json!({ "success": true, "results": { "token": " " } })).unwrap();
        assert_eq!(blank.token(), None);

        let missing: LoginResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(missing.token(), None);
    }
}
