//! # API crate: talking to the remote school service
//!
//! Everything between a validated form or a search box and the network lives here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`SchoolBackend`]: the operations the remote service offers |
//! | [`http`] | [`HttpBackend`]: reqwest implementation (JSON, multipart, `token` header) |
//! | [`models`] | Wire models, lenient [`SchoolRecord`] decoding, search criteria |
//! | [`flows`] | Login, registration and contact submissions mapped to form outcomes |
//! | [`directory`] | [`Directory`]: ticketed listing and search requests, reset, 401 handling |
//! | [`error`] | [`ApiError`] and the mapping to user-visible text |
//!
//! Remote failures never propagate past this crate as errors: flows return an
//! [`forms::Outcome`], and the directory records a [`directory::Notice`] or
//! reports [`directory::Access::Denied`].

pub mod backend;
pub mod directory;
pub mod error;
pub mod flows;
pub mod http;
pub mod models;

#[cfg(test)]
mod mock;

pub use backend::SchoolBackend;
pub use directory::{
    Access, Directory, ListingRequest, Mode, Notice, PendingRequest, Phase, Ticket, request_listing, settle,
};
pub use error::ApiError;
pub use flows::{SignedIn, authenticate, establish_session, submit_contact, submit_registration};
pub use http::HttpBackend;
pub use models::{SchoolRecord, SearchCriteria, SearchField};
