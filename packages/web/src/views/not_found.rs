use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{path}");

    rsx! {
        section {
            class: "not-found",
            h1 { "404" }
            p { "الصفحة غير موجودة" }
            Link { class: "button button-primary", to: Route::Home {}, "العودة إلى الرئيسية" }
        }
    }
}
