//! Concrete form schemas used by the client.
//!
//! Field names double as wire names, so they follow the external API's spelling.

use crate::engine::FormSchema;
use crate::field::{FieldKind, FieldSpec, TextFormat};

/// Fallback shown when a failed request carries no message of its own.
pub const GENERIC_FAILURE: &str = "حدث خطأ ما";

const fn required_text(name: &'static str, required: &'static str) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldKind::Text {
            required,
            format: None,
        },
    )
}

const fn count(name: &'static str, not_a_number: &'static str) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldKind::Numeric {
            required: "مطلوب",
            not_a_number,
        },
    )
}

pub mod login {
    use super::*;

    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";

    pub static SCHEMA: FormSchema = FormSchema {
        fields: &[
            required_text(USERNAME, "اسم المستخدم مطلوب"),
            required_text(PASSWORD, "كلمة المرور مطلوبة"),
        ],
        success_fallback: "تم تسجيل الدخول بنجاح",
        failure_fallback: GENERIC_FAILURE,
        reset_on_success: false,
    };

    /// Shown when the server answers without a usable token.
    pub const MISSING_TOKEN: &str = "لم يتم استلام رمز المصادقة أو أن بنية الاستجابة غير متوقعة";
}

pub mod registration {
    use super::*;

    pub const SCHOOL_NAME: &str = "schoolName";
    pub const CITY: &str = "city";
    pub const CONTRACT_MANAGER_NAME: &str = "contractManagerName";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const EMAIL: &str = "email";
    pub const KINDERGARTEN_STUDENTS: &str = "kindergartenStudents";
    pub const PRIMARY_1_TO_4_STUDENTS: &str = "primary1to4Students";
    pub const PRIMARY_5_TO_6_STUDENTS: &str = "primary5to6Students";
    pub const INTERMEDIATE_1_TO_2_STUDENTS: &str = "intermediate1to2Students";
    pub const INTERMEDIATE_3_STUDENTS: &str = "intermediate3Students";
    pub const SECONDARY_STUDENTS: &str = "secondaryStudents";
    pub const HAS_COMPUTER_LAB: &str = "hasComputerLab";
    pub const HAS_INTERNET: &str = "hasInternet";
    pub const COMMERCIAL_REGISTRATION: &str = "commercialRegistration";
    pub const CONTRACT_MANAGER_ID: &str = "contractManagerId";

    /// The six student-count buckets, youngest first.
    pub const STUDENT_COUNTS: [&str; 6] = [
        KINDERGARTEN_STUDENTS,
        PRIMARY_1_TO_4_STUDENTS,
        PRIMARY_5_TO_6_STUDENTS,
        INTERMEDIATE_1_TO_2_STUDENTS,
        INTERMEDIATE_3_STUDENTS,
        SECONDARY_STUDENTS,
    ];

    /// File types the registration inputs offer in their picker.
    pub const ACCEPTED_DOCUMENTS: &str = "image/png,image/jpeg,image/jpg,application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    pub static SCHEMA: FormSchema = FormSchema {
        fields: &[
            required_text(SCHOOL_NAME, "اسم المدرسة مطلوب"),
            required_text(CITY, "المدينة مطلوبة"),
            required_text(CONTRACT_MANAGER_NAME, "اسم المسؤول مطلوب"),
            FieldSpec::new(
                PHONE_NUMBER,
                FieldKind::Text {
                    required: "رقم الجوال مطلوب",
                    format: Some(TextFormat::MobilePhone("رقم الجوال غير صحيح")),
                },
            ),
            FieldSpec::new(
                EMAIL,
                FieldKind::Text {
                    required: "البريد الإلكتروني مطلوب",
                    format: Some(TextFormat::Email("البريد الإلكتروني غير صحيح")),
                },
            ),
            count(KINDERGARTEN_STUDENTS, "عدد الطلاب في الروضة يجب أن يكون رقم"),
            count(PRIMARY_1_TO_4_STUDENTS, "عدد الطلبة سنة اولى الى رابع ابتدائي يجب أن يكون رقم"),
            count(PRIMARY_5_TO_6_STUDENTS, "عدد الطلبة سنة خامس وسادس ابتدائي يجب أن يكون رقم"),
            count(INTERMEDIATE_1_TO_2_STUDENTS, "عدد الطلبة سنة اولى وثاني متوسطة يجب أن يكون رقم"),
            count(INTERMEDIATE_3_STUDENTS, "عدد الطلبة سنة ثالث متوسطة يجب أن يكون رقم"),
            count(SECONDARY_STUDENTS, "عدد الطلاب للمرحلة الثانوية يجب أن يكون رقم"),
            FieldSpec::new(HAS_COMPUTER_LAB, FieldKind::Choice { required: "هذا الحقل مطلوب" }),
            FieldSpec::new(HAS_INTERNET, FieldKind::Choice { required: "هذا الحقل مطلوب" }),
            FieldSpec::new(COMMERCIAL_REGISTRATION, FieldKind::File { required: "السجل التجاري مطلوب" }),
            FieldSpec::new(CONTRACT_MANAGER_ID, FieldKind::File { required: "هوية المسؤول مطلوبة" }),
        ],
        success_fallback: "تم إرسال طلب التسجيل بنجاح",
        failure_fallback: GENERIC_FAILURE,
        reset_on_success: true,
    };
}

pub mod contact {
    use super::*;

    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";

    pub static SCHEMA: FormSchema = FormSchema {
        fields: &[
            required_text(NAME, "Name is required"),
            FieldSpec::new(
                EMAIL,
                FieldKind::Text {
                    required: "Email is required",
                    format: Some(TextFormat::Email("Invalid email address")),
                },
            ),
            required_text(MESSAGE, "Message is required"),
        ],
        success_fallback: "Your message has been sent successfully!",
        failure_fallback: "An error occurred while sending your message.",
        reset_on_success: true,
    };
}
