use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "سجّل مدرستك في البرنامج" }
            p {
                "نرحب بجميع المدارس الأهلية والحكومية للانضمام. "
                "يستغرق التسجيل دقائق، ويكفي تجهيز السجل التجاري وهوية المسؤول."
            }
            div {
                class: "hero-actions",
                Link { class: "button button-primary", to: Route::Register {}, "ابدأ التسجيل" }
                Link { class: "button", to: Route::Contact {}, "تواصل معنا" }
            }
        }
    }
}
