//! Wire models exchanged with the remote school API.

mod auth;
mod contact;
mod registration;
mod school;
mod search;

use serde::Deserialize;

pub use auth::{Credentials, LoginResponse, LoginResults};
pub use contact::ContactMessage;
pub use registration::SchoolRegistration;
pub use school::{DocumentLink, SchoolRecord, StudentCounts, listing_from_body};
pub use search::{SearchCriteria, SearchField};

/// Any response body that may carry a human-readable `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty())
    }
}
