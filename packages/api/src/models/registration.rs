//! School registration payload, sent as `multipart/form-data`.

use forms::schemas::registration as f;
use forms::{FileHandle, FormSnapshot};

use crate::error::ApiError;

/// A validated registration, converted from the form snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SchoolRegistration {
    pub school_name: String,
    pub city: String,
    pub contract_manager_name: String,
    pub phone_number: String,
    pub email: String,
    /// Student counts in [`f::STUDENT_COUNTS`] order.
    pub student_counts: [u32; 6],
    pub has_computer_lab: bool,
    pub has_internet: bool,
    pub commercial_registration: FileHandle,
    pub contract_manager_id: FileHandle,
}

impl TryFrom<&FormSnapshot> for SchoolRegistration {
    type Error = ApiError;

    fn try_from(snapshot: &FormSnapshot) -> Result<Self, Self::Error> {
        let mut student_counts = [0u32; 6];
        for (slot, name) in student_counts.iter_mut().zip(f::STUDENT_COUNTS) {
            *slot = snapshot
                .text(name)
                .parse()
                .map_err(|_| ApiError::InvalidForm(name.to_string()))?;
        }
        let choice = |name: &str| {
            snapshot
                .choice(name)
                .map(|c| c.as_bool())
                .ok_or_else(|| ApiError::InvalidForm(name.to_string()))
        };
        let file = |name: &str| {
            snapshot
                .file(name)
                .cloned()
                .ok_or_else(|| ApiError::InvalidForm(name.to_string()))
        };

        Ok(Self {
            school_name: snapshot.text(f::SCHOOL_NAME).to_string(),
            city: snapshot.text(f::CITY).to_string(),
            contract_manager_name: snapshot.text(f::CONTRACT_MANAGER_NAME).to_string(),
            phone_number: snapshot.text(f::PHONE_NUMBER).to_string(),
            email: snapshot.text(f::EMAIL).to_string(),
            student_counts,
            has_computer_lab: choice(f::HAS_COMPUTER_LAB)?,
            has_internet: choice(f::HAS_INTERNET)?,
            commercial_registration: file(f::COMMERCIAL_REGISTRATION)?,
            contract_manager_id: file(f::CONTRACT_MANAGER_ID)?,
        })
    }
}

impl SchoolRegistration {
    /// Every non-file part as `(name, value)`, empty text values left out.
    ///
    /// Yes/no answers go out as `"true"` / `"false"`.
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts: Vec<(&'static str, String)> = [
            (f::SCHOOL_NAME, &self.school_name),
            (f::CITY, &self.city),
            (f::CONTRACT_MANAGER_NAME, &self.contract_manager_name),
            (f::PHONE_NUMBER, &self.phone_number),
            (f::EMAIL, &self.email),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k, v.clone()))
        .collect();

        parts.extend(
            f::STUDENT_COUNTS
                .iter()
                .zip(self.student_counts)
                .map(|(k, n)| (*k, n.to_string())),
        );
        parts.push((f::HAS_COMPUTER_LAB, self.has_computer_lab.to_string()));
        parts.push((f::HAS_INTERNET, self.has_internet.to_string()));
        parts
    }

    /// The two document parts with their wire names.
    pub fn file_parts(&self) -> [(&'static str, &FileHandle); 2] {
        [
            (f::COMMERCIAL_REGISTRATION, &self.commercial_registration),
            (f::CONTRACT_MANAGER_ID, &self.contract_manager_id),
        ]
    }
}
