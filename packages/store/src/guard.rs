//! Route protection derived from the session.

use crate::session::{SessionStore, TokenStorage};

/// Entry point unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";
/// Where an authenticated visitor of the login page lands.
pub const SCHOOLS_PATH: &str = "/schools";

/// Whether a protected view may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session hydration still pending; show a neutral waiting indicator.
    Loading,
    Authorized,
    /// Redirect to [`LOGIN_PATH`].
    Unauthorized,
}

impl GuardState {
    pub fn evaluate<S: TokenStorage>(session: &SessionStore<S>) -> Self {
        if session.is_loading() {
            GuardState::Loading
        } else if session.is_authenticated() {
            GuardState::Authorized
        } else {
            GuardState::Unauthorized
        }
    }

    /// Path to navigate to, if this state requires leaving the protected view.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            GuardState::Unauthorized => Some(LOGIN_PATH),
            _ => None,
        }
    }
}

/// Tracks the guard state across navigations and authorization failures.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteGuard {
    state: GuardState,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            state: GuardState::Loading,
        }
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Re-evaluate against the current session and record the result.
    pub fn observe<S: TokenStorage>(&mut self, session: &SessionStore<S>) -> GuardState {
        let next = GuardState::evaluate(session);
        if next != self.state {
            tracing::info!(from = ?self.state, to = ?next, "Route guard transition");
            self.state = next;
        }
        next
    }

    /// A guarded request was refused with 401: end the session and re-evaluate.
    ///
    /// Returns the redirect target.
    pub fn deny<S: TokenStorage>(&mut self, session: &mut SessionStore<S>) -> &'static str {
        tracing::warn!("Authorization denied, ending session");
        session.logout();
        self.observe(session);
        LOGIN_PATH
    }
}
