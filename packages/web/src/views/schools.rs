//! Authenticated school directory: listing, search and reset.

use api::{
    request_listing, settle, Directory, Mode, PendingRequest, Phase, SchoolBackend, SchoolRecord,
    SearchField,
};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::RouteGuard;
use ui::{
    use_backend, use_guard, use_session, Alert, AlertKind, LogoutButton, ProtectedRoute, Session,
    Spinner,
};

#[component]
pub fn Schools() -> Element {
    rsx! {
        ProtectedRoute {
            SchoolDirectory {}
        }
    }
}

#[component]
fn SchoolDirectory() -> Element {
    let backend = use_backend();
    let session = use_session();
    let guard = use_guard();
    let nav = use_navigator();
    let mut directory = use_signal(Directory::new);

    let fetch_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = fetch_backend.clone();
        async move {
            let Some(pending) = directory.write().begin_fetch() else {
                return;
            };
            run_listing(backend, pending, directory, session, guard, nav).await;
        }
    });

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(pending) = directory.write().begin_search() else {
            return;
        };
        spawn(run_listing(backend.clone(), pending, directory, session, guard, nav));
    };

    let state = directory.read();
    let busy = state.is_busy();

    rsx! {
        section {
            class: "directory",
            header {
                class: "directory-header",
                h1 { "المدارس المسجلة" }
                LogoutButton { class: "button" }
            }

            form {
                class: "search",
                onsubmit: handle_search,
                for field in SearchField::ALL {
                    div {
                        key: "{field}",
                        class: "field",
                        label { r#for: "search-{field}", "{field.label()}" }
                        input {
                            id: "search-{field}",
                            r#type: "search",
                            value: "{state.criteria().get(field)}",
                            oninput: move |evt: FormEvent| directory.write().set_criterion(field, evt.value()),
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "button button-primary",
                        r#type: "submit",
                        disabled: busy,
                        if state.phase() == Phase::Searching { "جاري البحث..." } else { "بحث" }
                    }
                    button {
                        class: "button",
                        r#type: "button",
                        disabled: state.phase() == Phase::Loading,
                        onclick: move |_| directory.write().reset(),
                        "إعادة تعيين"
                    }
                }
            }

            if let Some(notice) = state.notice() {
                Alert {
                    message: notice.text().to_string(),
                    kind: if notice.is_error() { AlertKind::Error } else { AlertKind::Info },
                }
            }

            if state.phase() == Phase::Loading {
                Spinner {}
            } else {
                p {
                    class: "result-count",
                    if state.mode() == Mode::Search { "نتائج البحث: " } else { "عدد المدارس: " }
                    "{state.records().len()}"
                }
                div {
                    class: "school-grid",
                    for record in state.records().iter().cloned() {
                        SchoolCard { key: "{record.id}", record }
                    }
                }
            }
        }
    }
}

/// Send `pending` and record its result. A refused token ends the session
/// and leaves the protected view.
async fn run_listing<B: SchoolBackend>(
    backend: B,
    pending: PendingRequest,
    mut directory: Signal<Directory>,
    mut session: Signal<Session>,
    mut guard: Signal<RouteGuard>,
    nav: Navigator,
) {
    let token = session.peek().token().map(str::to_string);
    let result = request_listing(&backend, token.as_deref(), pending.request()).await;
    let access = directory.write().finish(pending.ticket(), result);
    if let Some(path) = settle(access, &mut *session.write(), &mut *guard.write()) {
        nav.replace(path);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "نعم"
    } else {
        "لا"
    }
}

#[component]
fn SchoolCard(record: SchoolRecord) -> Element {
    let registered = record.registered_on();
    let updated = record.updated_on();

    rsx! {
        article {
            class: "school-card",
            h2 { "{record.school_name}" }
            p { class: "school-city", "{record.city}" }

            dl {
                dt { "المسؤول" }
                dd { "{record.contract_manager_name}" }
                dt { "الجوال" }
                dd { a { href: "tel:{record.phone_number}", "{record.phone_number}" } }
                dt { "البريد الإلكتروني" }
                dd { a { href: "mailto:{record.email}", "{record.email}" } }
                if let Some(date) = registered {
                    dt { "تاريخ التسجيل" }
                    dd { "{date}" }
                }
                if let Some(date) = updated {
                    dt { "آخر تحديث" }
                    dd { "{date}" }
                }
            }

            table {
                class: "student-counts",
                tbody {
                    for (label, count) in record.students.labelled() {
                        tr {
                            key: "{label}",
                            th { "{label}" }
                            td { "{count}" }
                        }
                    }
                    tr {
                        th { "المجموع" }
                        td { "{record.students.total()}" }
                    }
                }
            }

            ul {
                class: "facilities",
                li { "معمل حاسب: {yes_no(record.has_computer_lab)}" }
                li { "إنترنت: {yes_no(record.has_internet)}" }
            }

            div {
                class: "documents",
                if let Some(href) = record.commercial_registration.href() {
                    a { href: "{href}", target: "_blank", rel: "noopener", "السجل التجاري" }
                }
                if let Some(href) = record.contract_manager_id.href() {
                    a { href: "{href}", target: "_blank", rel: "noopener", "هوية المسؤول" }
                }
            }
        }
    }
}
