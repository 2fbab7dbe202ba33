//! This crate contains all shared UI for the workspace.

pub mod components;
pub use components::{Alert, AlertKind, Spinner};

mod platform;
pub use platform::{make_storage, PlatformStorage};

mod auth;
pub use auth::{use_guard, use_session, AuthProvider, LogoutButton, ProtectedRoute, Session};

mod backend;
pub use backend::{use_backend, BackendProvider};

mod form;
pub use form::{use_form, ChoiceField, FileField, SubmitStatusAlert, TextField};

mod preview;
pub use preview::use_file_preview;

mod navbar;
pub use navbar::Navbar;
