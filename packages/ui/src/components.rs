//! Small presentational building blocks.

use dioxus::prelude::*;

/// Neutral waiting indicator.
#[component]
pub fn Spinner(#[props(default = "جاري التحميل...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            span { class: "spinner-circle" }
            span { class: "spinner-label", "{label}" }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Info => "alert alert-info",
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

/// A message box. With `ondismiss` set it shows a close button.
#[component]
pub fn Alert(
    message: String,
    #[props(default)] kind: AlertKind,
    ondismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: if kind == AlertKind::Error { "alert" } else { "status" },
            span { "{message}" }
            if let Some(ondismiss) = ondismiss {
                button {
                    class: "alert-close",
                    r#type: "button",
                    onclick: move |_| ondismiss.call(()),
                    "×"
                }
            }
        }
    }
}
