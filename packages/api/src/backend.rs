//! The remote school service as seen by the client.

use crate::error::ApiError;
use crate::models::{ContactMessage, Credentials, LoginResponse, SchoolRecord, SchoolRegistration, SearchCriteria};

/// Operations offered by the remote school service.
///
/// [`HttpBackend`](crate::HttpBackend) is the production implementation. The
/// futures are not required to be `Send`: everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait SchoolBackend {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /school/register`, returning the server's confirmation message.
    async fn register_school(
        &self,
        registration: &SchoolRegistration,
    ) -> Result<Option<String>, ApiError>;

    /// `GET /school/allschools`
    async fn all_schools(&self, token: &str) -> Result<Vec<SchoolRecord>, ApiError>;

    /// `GET /school/search`. Not-found is reported as [`ApiError::NotFound`].
    async fn search_schools(
        &self,
        token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<SchoolRecord>, ApiError>;

    /// Post the contact form, returning the server's confirmation message.
    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError>;
}
