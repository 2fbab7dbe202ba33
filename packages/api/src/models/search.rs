//! Search criteria for the school directory.

use std::fmt;

/// One searchable attribute, named as the search endpoint expects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    SchoolName,
    City,
    ContractManagerName,
    PhoneNumber,
    Email,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::SchoolName,
        SearchField::City,
        SearchField::ContractManagerName,
        SearchField::PhoneNumber,
        SearchField::Email,
    ];

    /// Query parameter name.
    pub fn wire_name(self) -> &'static str {
        match self {
            SearchField::SchoolName => "schoolName",
            SearchField::City => "city",
            SearchField::ContractManagerName => "contractManagerName",
            SearchField::PhoneNumber => "phoneNumber",
            SearchField::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::SchoolName => "اسم المدرسة",
            SearchField::City => "المدينة",
            SearchField::ContractManagerName => "اسم المسؤول",
            SearchField::PhoneNumber => "رقم الجوال",
            SearchField::Email => "البريد الإلكتروني",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Optional filters; all-empty means "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub school_name: String,
    pub city: String,
    pub contract_manager_name: String,
    pub phone_number: String,
    pub email: String,
}

impl SearchCriteria {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::SchoolName => &self.school_name,
            SearchField::City => &self.city,
            SearchField::ContractManagerName => &self.contract_manager_name,
            SearchField::PhoneNumber => &self.phone_number,
            SearchField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        let slot = match field {
            SearchField::SchoolName => &mut self.school_name,
            SearchField::City => &mut self.city,
            SearchField::ContractManagerName => &mut self.contract_manager_name,
            SearchField::PhoneNumber => &mut self.phone_number,
            SearchField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: SearchField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        SearchField::ALL.iter().all(|f| self.get(*f).trim().is_empty())
    }

    /// Trimmed, non-empty criteria as query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        SearchField::ALL
            .iter()
            .filter_map(|f| {
                let value = self.get(*f).trim();
                (!value.is_empty()).then(|| (f.wire_name(), value.to_string()))
            })
            .collect()
    }
}
