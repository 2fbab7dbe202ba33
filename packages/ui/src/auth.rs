//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{ClientConfig, GuardState, RouteGuard, SessionStore, LOGIN_PATH};

use crate::components::Spinner;
use crate::platform::{make_storage, PlatformStorage};

/// The session type shared through context.
pub type Session = SessionStore<PlatformStorage>;

/// Get the session. Writes through this signal are the only way to log in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the route guard that follows the session.
pub fn use_guard() -> Signal<RouteGuard> {
    use_context::<Signal<RouteGuard>>()
}

/// Provider component that owns the session and the route guard.
///
/// Requires a [`ClientConfig`] in context. The session starts in its loading
/// phase and is hydrated from storage once the provider has mounted.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    let mut session = use_signal(|| SessionStore::new(make_storage(&config.session)));
    let mut guard = use_signal(RouteGuard::new);

    use_effect(move || {
        if session.peek().is_loading() {
            session.write().hydrate();
        }
    });

    // Keep the guard in step with every login, logout and hydration
    use_effect(move || {
        let current = session.read();
        guard.write().observe(&*current);
    });

    use_context_provider(|| session);
    use_context_provider(|| guard);

    rsx! {
        {children}
    }
}

/// Renders `children` only for an authenticated session.
///
/// Shows a spinner while the session is hydrating and replaces the route with
/// the login page once it is known to be unauthenticated.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = GuardState::evaluate(&*session.read());

    use_effect(move || {
        if let Some(path) = GuardState::evaluate(&*session.read()).redirect() {
            tracing::debug!("Redirecting unauthenticated visitor to {path}");
            nav.replace(path);
        }
    });

    match state {
        GuardState::Loading => rsx! { Spinner {} },
        GuardState::Authorized => rsx! { {children} },
        GuardState::Unauthorized => rsx! {},
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "تسجيل الخروج".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        session.write().logout();
        nav.replace(LOGIN_PATH);
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: onclick,
            "{label}"
        }
    }
}
