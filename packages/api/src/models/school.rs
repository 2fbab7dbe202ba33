//! # School record as returned by the directory endpoints
//!
//! Records are owned by the remote service and only ever read here. The service
//! has shipped several shapes of the same document over time, so decoding is
//! deliberately forgiving:
//!
//! - the id arrives as `_id` (or `id`);
//! - student counts may be numbers, numeric strings or missing (→ `0`);
//! - facility flags may be booleans or the strings `"true"` / `"نعم"`;
//! - timestamps are optional RFC 3339 strings;
//! - the listing itself may sit under `المدارس`, `schools` or `results`, or be a
//!   bare array ([`listing_from_body`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys a listing may be wrapped in, tried in order.
const LISTING_KEYS: [&str; 3] = ["المدارس", "schools", "results"];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contract_manager_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(flatten)]
    pub students: StudentCounts,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_computer_lab: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_internet: bool,
    #[serde(default)]
    pub commercial_registration: DocumentLink,
    #[serde(default)]
    pub contract_manager_id: DocumentLink,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SchoolRecord {
    /// Registration day as `YYYY-MM-DD`, when known.
    pub fn registered_on(&self) -> Option<String> {
        self.created_at.map(day)
    }

    /// Day of the last update as `YYYY-MM-DD`, when known.
    pub fn updated_on(&self) -> Option<String> {
        self.updated_at.map(day)
    }
}

fn day(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// The six student-count buckets of a school.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCounts {
    #[serde(default, deserialize_with = "lenient_count")]
    pub kindergarten_students: u32,
    #[serde(default, rename = "primary1to4Students", deserialize_with = "lenient_count")]
    pub primary_1_to_4_students: u32,
    #[serde(default, rename = "primary5to6Students", deserialize_with = "lenient_count")]
    pub primary_5_to_6_students: u32,
    #[serde(default, rename = "intermediate1to2Students", deserialize_with = "lenient_count")]
    pub intermediate_1_to_2_students: u32,
    #[serde(default, rename = "intermediate3Students", deserialize_with = "lenient_count")]
    pub intermediate_3_students: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub secondary_students: u32,
}

impl StudentCounts {
    /// Buckets paired with their display labels, youngest first.
    pub fn labelled(&self) -> [(&'static str, u32); 6] {
        [
            ("الروضة", self.kindergarten_students),
            ("الصفوف 1-4", self.primary_1_to_4_students),
            ("الصفوف 5-6", self.primary_5_to_6_students),
            ("المتوسط 1-2", self.intermediate_1_to_2_students),
            ("المتوسط 3", self.intermediate_3_students),
            ("الثانوي", self.secondary_students),
        ]
    }

    pub fn total(&self) -> u64 {
        self.labelled().iter().map(|(_, n)| u64::from(*n)).sum()
    }
}

/// Link to an uploaded document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentLink {
    #[serde(default)]
    pub url: Option<String>,
}

impl DocumentLink {
    pub fn href(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Extract the record list from a listing response body.
///
/// Records that fail to decode are skipped with a warning rather than failing
/// the whole listing.
pub fn listing_from_body(body: Value) -> Vec<SchoolRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let Some(inner) = LISTING_KEYS.iter().find_map(|k| map.remove(*k)) else {
                return Vec::new();
            };
            match inner {
                Value::Array(items) => items,
                // `{results: {schools: [...]}}`
                nested @ Value::Object(_) => return listing_from_body(nested),
                _ => return Vec::new(),
            }
        }
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SchoolRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping undecodable school record: {e}");
                None
            }
        })
        .collect()
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim(), "true" | "نعم"),
        _ => false,
    })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    })
}
