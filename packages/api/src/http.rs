//! # `HttpBackend`: reqwest client for the school API
//!
//! | Operation | Request | Body |
//! |-----------|---------|------|
//! | `login` | `POST {base}/auth/login` | JSON [`Credentials`] |
//! | `register_school` | `POST {base}/school/register` | multipart, two file parts |
//! | `all_schools` | `GET {base}/school/allschools` | none, `token` header |
//! | `search_schools` | `GET {base}/school/search?…` | none, `token` header |
//! | `send_contact` | `POST {contact_url}` | JSON [`ContactMessage`] |
//!
//! Every non-2xx response becomes an [`ApiError`] via [`ApiError::from_status`],
//! which keeps the body's `message` for display. An empty 2xx body decodes as
//! JSON `null`.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use store::config::ApiConfig;

use crate::backend::SchoolBackend;
use crate::error::ApiError;
use crate::models::{
    ApiMessage, ContactMessage, Credentials, LoginResponse, SchoolRecord, SchoolRegistration,
    SearchCriteria, listing_from_body,
};

/// Header carrying the session token on protected requests.
pub const TOKEN_HEADER: &str = "token";

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        read_body(response).await
    }

    fn authorized_get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .get(self.config.endpoint(path))
            .header(TOKEN_HEADER, token)
    }
}

/// Two backends are interchangeable when they talk to the same endpoints.
impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;
    tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "API response");

    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

fn message_of(body: Value) -> Option<String> {
    serde_json::from_value::<ApiMessage>(body)
        .ok()
        .and_then(ApiMessage::into_message)
}

fn registration_form(registration: &SchoolRegistration) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in registration.text_parts() {
        form = form.text(name, value);
    }
    for (name, file) in registration.file_parts() {
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        form = form.part(name, part);
    }
    Ok(form)
}

impl SchoolBackend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username = %credentials.username, "Logging in");
        let body = self
            .send(
                self.client
                    .post(self.config.endpoint("/auth/login"))
                    .json(credentials),
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn register_school(
        &self,
        registration: &SchoolRegistration,
    ) -> Result<Option<String>, ApiError> {
        tracing::debug!(school = %registration.school_name, "Registering school");
        let form = registration_form(registration)?;
        let body = self
            .send(
                self.client
                    .post(self.config.endpoint("/school/register"))
                    .multipart(form),
            )
            .await?;
        Ok(message_of(body))
    }

    async fn all_schools(&self, token: &str) -> Result<Vec<SchoolRecord>, ApiError> {
        let body = self
            .send(self.authorized_get("/school/allschools", token))
            .await?;
        Ok(listing_from_body(body))
    }

    async fn search_schools(
        &self,
        token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<SchoolRecord>, ApiError> {
        let query = criteria.query_pairs();
        tracing::debug!(filters = query.len(), "Searching schools");
        let body = self
            .send(self.authorized_get("/school/search", token).query(&query))
            .await?;
        Ok(listing_from_body(body))
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError> {
        let body = self
            .send(self.client.post(&self.config.contact_url).json(message))
            .await?;
        Ok(message_of(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms::FileHandle;

    #[test]
    fn test_new_uses_config() {
        let config = ApiConfig {
            base_url: "http://localhost:9/api".to_string(),
            ..ApiConfig::default()
        };
        let backend = HttpBackend::new(config.clone()).unwrap();
        assert_eq!(backend.config(), &config);
    }

    #[test]
    fn test_message_of() {
        assert_eq!(
            message_of(serde_json::json!({ "message": "تم" })),
            Some("تم".to_string())
        );
        assert_eq!(message_of(serde_json::json!({ "message": "" })), None);
        assert_eq!(message_of(Value::Null), None);
    }

    #[test]
    fn test_registration_form_rejects_bad_mime() {
        let doc = FileHandle::new("x", Some("not a mime".to_string()), vec![1]);
        let registration = SchoolRegistration {
            school_name: "s".to_string(),
            city: "c".to_string(),
            contract_manager_name: "m".to_string(),
            phone_number: "0551234567".to_string(),
            email: "s@example.com".to_string(),
            student_counts: [1; 6],
            has_computer_lab: true,
            has_internet: false,
            commercial_registration: doc.clone(),
            contract_manager_id: doc,
        };
        assert!(matches!(
            registration_form(&registration),
            Err(ApiError::Http(_))
        ));
    }
}
