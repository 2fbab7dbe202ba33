use dioxus::prelude::*;
use ui::{use_session, Navbar};

use crate::Route;

/// Navbar around every page.
#[component]
pub fn Layout() -> Element {
    let session = use_session();
    let authenticated = session.read().is_authenticated();

    rsx! {
        div {
            class: "app",
            dir: "rtl",
            Navbar {
                Link { to: Route::Home {}, "الرئيسية" }
                Link { to: Route::Register {}, "تسجيل مدرسة" }
                Link { to: Route::Contact {}, "تواصل معنا" }
                if authenticated {
                    Link { to: Route::Schools {}, "المدارس" }
                } else {
                    Link { to: Route::Login {}, "تسجيل الدخول" }
                }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}
