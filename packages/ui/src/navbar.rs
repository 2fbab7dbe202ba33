use dioxus::prelude::*;

/// Top bar with the brand name; links are passed as children.
#[component]
pub fn Navbar(#[props(default = "إيفاز".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
