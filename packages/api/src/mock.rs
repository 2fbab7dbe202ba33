//! Scripted [`SchoolBackend`] for tests.

use std::cell::RefCell;

use serde_json::Value;

use crate::backend::SchoolBackend;
use crate::error::ApiError;
use crate::models::{
    ApiMessage, ContactMessage, Credentials, LoginResponse, SchoolRecord, SchoolRegistration,
    SearchCriteria, listing_from_body,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(Credentials),
    /// School name of the registration.
    Register(String),
    AllSchools(String),
    Search(String, Vec<(&'static str, String)>),
    Contact(ContactMessage),
}

/// Answers every request with the same status and body, recording each call.
pub struct MockBackend {
    status: u16,
    body: Value,
    calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn reply(&self, call: Call) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(call);
        if (200..300).contains(&self.status) {
            Ok(self.body.clone())
        } else {
            Err(ApiError::from_status(self.status, &self.body.to_string()))
        }
    }
}

impl SchoolBackend for MockBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = self.reply(Call::Login(credentials.clone()))?;
        Ok(serde_json::from_value(body)?)
    }

    async fn register_school(
        &self,
        registration: &SchoolRegistration,
    ) -> Result<Option<String>, ApiError> {
        let body = self.reply(Call::Register(registration.school_name.clone()))?;
        Ok(serde_json::from_value::<ApiMessage>(body)?.into_message())
    }

    async fn all_schools(&self, token: &str) -> Result<Vec<SchoolRecord>, ApiError> {
        Ok(listing_from_body(self.reply(Call::AllSchools(token.to_string()))?))
    }

    async fn search_schools(
        &self,
        token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<SchoolRecord>, ApiError> {
        let call = Call::Search(token.to_string(), criteria.query_pairs());
        Ok(listing_from_body(self.reply(call)?))
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError> {
        let body = self.reply(Call::Contact(message.clone()))?;
        Ok(serde_json::from_value::<ApiMessage>(body)?.into_message())
    }
}
