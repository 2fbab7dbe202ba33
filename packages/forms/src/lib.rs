//! Form engine shared by the login, registration and contact views.

pub mod engine;
pub mod field;
pub mod preview;
pub mod schemas;

pub use engine::{FieldError, FormSchema, FormSnapshot, FormState, Outcome, SubmitBlocked, SubmitStatus};
pub use field::{FieldKind, FieldSpec, FieldValue, FileHandle, TextFormat, YesNo};
pub use preview::preview_data_url;
