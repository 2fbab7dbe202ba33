//! Contact form body.

use serde::Serialize;

use forms::FormSnapshot;
use forms::schemas::contact;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&FormSnapshot> for ContactMessage {
    fn from(snapshot: &FormSnapshot) -> Self {
        Self {
            name: snapshot.text(contact::NAME).to_string(),
            email: snapshot.text(contact::EMAIL).to_string(),
            message: snapshot.text(contact::MESSAGE).to_string(),
        }
    }
}
