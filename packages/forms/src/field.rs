//! # Typed form fields
//!
//! A form is described by a list of [`FieldSpec`]s. Each spec carries a
//! [`FieldKind`], a tagged union with one variant per kind of input the client
//! renders, and each kind owns the validation rule for its values:
//!
//! | Kind | Value | Rule |
//! |------|-------|------|
//! | `Text` | [`FieldValue::Text`] | non-blank, then optional [`TextFormat`] |
//! | `Numeric` | [`FieldValue::Text`] | non-blank, then a non-negative whole number |
//! | `Choice` | [`FieldValue::Choice`] | one of [`YesNo`] selected |
//! | `File` | [`FieldValue::File`] | a file selected |
//!
//! Numeric fields keep the raw text the user typed so the input can show it back
//! unchanged; the number is only parsed during validation and transmission.

use std::fmt;
use std::sync::LazyLock;

use bytes::Bytes;
use regex::Regex;

static MOBILE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(05|5)(5|0|3|6|4|9|1|8|7)([0-9]{7})$").expect("valid phone pattern")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email pattern")
});

/// Extra constraint on a non-blank text value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    Email(&'static str),
    /// Local mobile number: `05` or `5`, an operator digit, then seven digits.
    MobilePhone(&'static str),
}

impl TextFormat {
    fn check(self, value: &str) -> Option<&'static str> {
        match self {
            TextFormat::Email(message) => (!EMAIL.is_match(value)).then_some(message),
            TextFormat::MobilePhone(message) => {
                (!MOBILE_PHONE.is_match(value)).then_some(message)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        required: &'static str,
        format: Option<TextFormat>,
    },
    Numeric {
        required: &'static str,
        /// Shown when the value is present but not a whole number.
        not_a_number: &'static str,
    },
    Choice {
        required: &'static str,
    },
    File {
        required: &'static str,
    },
}

/// One field of a form schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, also used as the wire name when the form is transmitted.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// The value a freshly mounted or reset form holds.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text { .. } | FieldKind::Numeric { .. } => FieldValue::Text(String::new()),
            FieldKind::Choice { .. } => FieldValue::Choice(None),
            FieldKind::File { .. } => FieldValue::File(None),
        }
    }

    /// Whether `value` has the shape this field stores.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self.kind, value),
            (FieldKind::Text { .. } | FieldKind::Numeric { .. }, FieldValue::Text(_))
                | (FieldKind::Choice { .. }, FieldValue::Choice(_))
                | (FieldKind::File { .. }, FieldValue::File(_))
        )
    }

    /// Apply this field's rule, returning the error message if it fails.
    pub fn check(&self, value: &FieldValue) -> Option<&'static str> {
        match (self.kind, value) {
            (FieldKind::Text { required, format }, FieldValue::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(required)
                } else {
                    format.and_then(|f| f.check(text))
                }
            }
            (
                FieldKind::Numeric {
                    required,
                    not_a_number,
                },
                FieldValue::Text(text),
            ) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(required)
                } else if text.parse::<u32>().is_err() {
                    Some(not_a_number)
                } else {
                    None
                }
            }
            (FieldKind::Choice { required }, FieldValue::Choice(choice)) => {
                choice.is_none().then_some(required)
            }
            (FieldKind::File { required }, FieldValue::File(file)) => {
                file.is_none().then_some(required)
            }
            (
                FieldKind::Text { required, .. }
                | FieldKind::Numeric { required, .. }
                | FieldKind::Choice { required }
                | FieldKind::File { required },
                _,
            ) => Some(required),
        }
    }
}

/// Current value of a field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<YesNo>),
    File(Option<FileHandle>),
}

/// Answer of a yes/no question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_bool(self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// Value used for `<option>` elements.
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "نعم",
            YesNo::No => "لا",
        }
    }

    /// Parse an option value or label; anything else (including the empty
    /// placeholder option) is no selection.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "yes" | "true" | "نعم" => Some(YesNo::Yes),
            "no" | "false" | "لا" => Some(YesNo::No),
            _ => None,
        }
    }
}

/// A file picked by the user, held as opaque bytes plus metadata.
#[derive(Clone, PartialEq)]
pub struct FileHandle {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: FieldSpec = FieldSpec::new(
        "phoneNumber",
        FieldKind::Text {
            required: "required",
            format: Some(TextFormat::MobilePhone("bad phone")),
        },
    );

    const EMAIL_FIELD: FieldSpec = FieldSpec::new(
        "email",
        FieldKind::Text {
            required: "required",
            format: Some(TextFormat::Email("bad email")),
        },
    );

    const COUNT: FieldSpec = FieldSpec::new(
        "secondaryStudents",
        FieldKind::Numeric {
            required: "required",
            not_a_number: "secondary must be a number",
        },
    );

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_valid_mobile_numbers() {
        for number in ["0551234567", "0501234567", "0531234567", "0591234567", "0581234567", "551234567", "571234567"] {
            assert_eq!(PHONE.check(&text(number)), None, "{number}");
        }
    }

    #[test]
    fn test_invalid_mobile_numbers() {
        for number in ["0521234567", "055123456", "05512345678", "+966551234567", "05x1234567", "1551234567", "055 123 4567"] {
            assert_eq!(PHONE.check(&text(number)), Some("bad phone"), "{number}");
        }
        assert_eq!(PHONE.check(&text("   ")), Some("required"));
    }

    #[test]
    fn test_email_format() {
        assert_eq!(EMAIL_FIELD.check(&text("school@example.com")), None);
        assert_eq!(EMAIL_FIELD.check(&text("first.last+tag@mail.example.sa")), None);
        // Dotless domains are accepted, as in an HTML email input
        assert_eq!(EMAIL_FIELD.check(&text("school@example")), None);
        assert_eq!(EMAIL_FIELD.check(&text("school@")), Some("bad email"));
        assert_eq!(EMAIL_FIELD.check(&text("not an email")), Some("bad email"));
        assert_eq!(EMAIL_FIELD.check(&text("")), Some("required"));
    }

    #[test]
    fn test_numeric_uses_field_specific_message() {
        assert_eq!(COUNT.check(&text("42")), None);
        assert_eq!(COUNT.check(&text(" 0 ")), None);
        assert_eq!(COUNT.check(&text("forty")), Some("secondary must be a number"));
        assert_eq!(COUNT.check(&text("-3")), Some("secondary must be a number"));
        assert_eq!(COUNT.check(&text("")), Some("required"));
    }

    #[test]
    fn test_choice_and_file_required() {
        let choice = FieldSpec::new("hasInternet", FieldKind::Choice { required: "pick one" });
        assert_eq!(choice.check(&FieldValue::Choice(None)), Some("pick one"));
        assert_eq!(choice.check(&FieldValue::Choice(Some(YesNo::No))), None);

        let file = FieldSpec::new("contractManagerId", FieldKind::File { required: "attach" });
        assert_eq!(file.check(&FieldValue::File(None)), Some("attach"));
        let handle = FileHandle::new("id.pdf", Some("application/pdf".to_string()), vec![1, 2, 3]);
        assert_eq!(file.check(&FieldValue::File(Some(handle))), None);
    }

    #[test]
    fn test_accepts_matches_kind() {
        assert!(COUNT.accepts(&text("1")));
        assert!(!COUNT.accepts(&FieldValue::Choice(None)));
    }

    #[test]
    fn test_yes_no_parsing() {
        assert_eq!(YesNo::parse("نعم"), Some(YesNo::Yes));
        assert_eq!(YesNo::parse("no"), Some(YesNo::No));
        assert_eq!(YesNo::parse(""), None);
        assert!(YesNo::Yes.as_bool());
        assert!(!YesNo::No.as_bool());
    }
}
