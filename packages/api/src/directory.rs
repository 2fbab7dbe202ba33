//! # Directory query service: the authenticated school listing
//!
//! [`Directory`] holds the last full listing, the records currently shown, the
//! search criteria being edited and a small state machine:
//!
//! ```text
//!            begin_fetch                    finish
//!   Idle ─────────────────▶ Loading ─────────────────────▶ Idle
//!     │      begin_search                   finish
//!     └───────────────────▶ Searching ───────────────────▶ Idle
//! ```
//!
//! Every request is handed out as a [`PendingRequest`] carrying a [`Ticket`].
//! [`Directory::finish`] only accepts the result of the ticket currently in
//! flight; anything else is a stale response and is dropped. While a request is
//! in flight the `begin_*` calls refuse to start another one.
//!
//! [`Directory::reset`] abandons a running search (its ticket is forgotten) but
//! never the full-listing fetch, which is the only source of the listing that
//! reset restores.
//!
//! A request goes out through [`request_listing`]. An authorization failure is
//! not turned into a notice: `finish` reports [`Access::Denied`] and [`settle`]
//! ends the session through [`RouteGuard::deny`].

use forms::schemas::GENERIC_FAILURE;
use store::{RouteGuard, SessionStore, TokenStorage};

use crate::backend::SchoolBackend;
use crate::error::ApiError;
use crate::models::{SchoolRecord, SearchCriteria, SearchField};

pub const NO_RESULTS: &str = "لا يوجد نتائج مطابقة";
pub const NEED_CRITERION: &str = "يرجى إدخال معيار بحث واحد على الأقل";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Searching,
}

/// What the visible listing represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    All,
    Search,
}

/// Message shown above the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    NoResults,
    NeedCriterion,
    Failed(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::NoResults => NO_RESULTS,
            Notice::NeedCriterion => NEED_CRITERION,
            Notice::Failed(message) => message,
        }
    }

    /// Whether this notice reports a failure rather than an empty result.
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Access {
    Granted,
    /// The server refused the session token.
    Denied,
}

/// Identifies one request handed out by a [`Directory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingRequest {
    All,
    Search(SearchCriteria),
}

/// A request the directory is waiting for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    ticket: Ticket,
    request: ListingRequest,
}

impl PendingRequest {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn request(&self) -> &ListingRequest {
        &self.request
    }
}

/// Send a listing request with the session token.
///
/// Without a token nothing is sent and the request counts as unauthorized.
pub async fn request_listing<B: SchoolBackend>(
    backend: &B,
    token: Option<&str>,
    request: &ListingRequest,
) -> Result<Vec<SchoolRecord>, ApiError> {
    let Some(token) = token else {
        return Err(ApiError::Unauthorized { message: None });
    };
    match request {
        ListingRequest::All => backend.all_schools(token).await,
        ListingRequest::Search(criteria) => backend.search_schools(token, criteria).await,
    }
}

/// End the session when `access` was denied, returning the redirect target.
pub fn settle<S: TokenStorage>(
    access: Access,
    session: &mut SessionStore<S>,
    guard: &mut RouteGuard,
) -> Option<&'static str> {
    match access {
        Access::Granted => None,
        Access::Denied => Some(guard.deny(session)),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    all: Vec<SchoolRecord>,
    visible: Vec<SchoolRecord>,
    criteria: SearchCriteria,
    mode: Mode,
    notice: Option<Notice>,
    issued: u64,
    fetching: Option<Ticket>,
    searching: Option<Ticket>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the full listing. Returns `None` if a request is already in flight.
    pub fn begin_fetch(&mut self) -> Option<PendingRequest> {
        if self.is_busy() {
            return None;
        }
        let ticket = self.issue();
        self.fetching = Some(ticket);
        self.notice = None;
        Some(PendingRequest {
            ticket,
            request: ListingRequest::All,
        })
    }

    pub fn set_criterion(&mut self, field: SearchField, value: impl Into<String>) {
        self.criteria.set(field, value);
    }

    /// Start a search with the current criteria.
    ///
    /// Returns `None` when a request is in flight, or with
    /// [`Notice::NeedCriterion`] when every criterion is blank.
    pub fn begin_search(&mut self) -> Option<PendingRequest> {
        if self.is_busy() {
            return None;
        }
        if self.criteria.is_empty() {
            self.notice = Some(Notice::NeedCriterion);
            return None;
        }
        let ticket = self.issue();
        self.searching = Some(ticket);
        self.notice = None;
        Some(PendingRequest {
            ticket,
            request: ListingRequest::Search(self.criteria.clone()),
        })
    }

    /// Record the result of the request identified by `ticket`.
    ///
    /// Results of abandoned or superseded requests are dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<SchoolRecord>, ApiError>,
    ) -> Access {
        if self.fetching == Some(ticket) {
            self.fetching = None;
            self.apply_listing(result)
        } else if self.searching == Some(ticket) {
            self.searching = None;
            self.apply_search(result)
        } else {
            tracing::debug!(?ticket, "Dropping stale directory response");
            Access::Granted
        }
    }

    /// Clear the criteria and show the last full listing again, without a request.
    ///
    /// A running search is abandoned; a running fetch still lands.
    pub fn reset(&mut self) {
        self.criteria = SearchCriteria::default();
        self.visible = self.all.clone();
        self.mode = Mode::All;
        self.searching = None;
        self.notice = None;
    }

    pub fn records(&self) -> &[SchoolRecord] {
        &self.visible
    }

    pub fn all_records(&self) -> &[SchoolRecord] {
        &self.all
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        if self.fetching.is_some() {
            Phase::Loading
        } else if self.searching.is_some() {
            Phase::Searching
        } else {
            Phase::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase() != Phase::Idle
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    fn apply_listing(&mut self, result: Result<Vec<SchoolRecord>, ApiError>) -> Access {
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Loaded school listing");
                if self.mode == Mode::All {
                    self.visible = records.clone();
                }
                self.all = records;
                Access::Granted
            }
            Err(e) => self.fail(e),
        }
    }

    fn apply_search(&mut self, result: Result<Vec<SchoolRecord>, ApiError>) -> Access {
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Search finished");
                self.mode = Mode::Search;
                if records.is_empty() {
                    self.notice = Some(Notice::NoResults);
                }
                self.visible = records;
                Access::Granted
            }
            Err(ApiError::NotFound { .. }) => {
                self.mode = Mode::Search;
                self.visible.clear();
                self.notice = Some(Notice::NoResults);
                Access::Granted
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ApiError) -> Access {
        if error.is_unauthorized() {
            self.all.clear();
            self.visible.clear();
            return Access::Denied;
        }
        tracing::warn!("Directory request failed: {error}");
        self.notice = Some(Notice::Failed(error.user_message(GENERIC_FAILURE)));
        Access::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockBackend};
    use serde_json::json;
    use store::{GuardState, MemoryStore, LOGIN_PATH};

    fn record(name: &str, city: &str) -> serde_json::Value {
        json!({ "_id": name, "schoolName": name, "city": city })
    }

    fn school(name: &str) -> SchoolRecord {
        serde_json::from_value(record(name, "Riyadh")).unwrap()
    }

    fn signed_in(token: &str) -> (MemoryStore, SessionStore<MemoryStore>, RouteGuard) {
        let storage = MemoryStore::with_token(token);
        let mut session = SessionStore::new(storage.clone());
        session.hydrate();
        let mut guard = RouteGuard::new();
        guard.observe(&session);
        (storage, session, guard)
    }

    /// Send `pending`, record the result and settle access, as the schools view does.
    async fn complete(
        directory: &mut Directory,
        pending: PendingRequest,
        backend: &MockBackend,
        session: &mut SessionStore<MemoryStore>,
        guard: &mut RouteGuard,
    ) -> Option<&'static str> {
        let result = request_listing(backend, session.token(), pending.request()).await;
        let access = directory.finish(pending.ticket(), result);
        settle(access, session, guard)
    }

    #[tokio::test]
    async fn test_fetch_sends_token() {
        let backend = MockBackend::ok(json!({ "المدارس": [record("a", "Riyadh"), record("b", "Jeddah")] }));
        let (_, mut session, mut guard) = signed_in("abc");
        let mut directory = Directory::new();

        let pending = directory.begin_fetch().unwrap();
        assert_eq!(directory.phase(), Phase::Loading);
        let redirect = complete(&mut directory, pending, &backend, &mut session, &mut guard).await;

        assert_eq!(redirect, None);
        assert_eq!(directory.records().len(), 2);
        assert_eq!(directory.phase(), Phase::Idle);
        assert_eq!(backend.calls(), vec![Call::AllSchools("abc".to_string())]);
    }

    #[tokio::test]
    async fn test_fetch_unauthorized_ends_session() {
        let backend = MockBackend::status(401, json!({ "message": "expired" }));
        let (storage, mut session, mut guard) = signed_in("abc");
        assert_eq!(guard.state(), GuardState::Authorized);
        let mut directory = Directory::new();

        let pending = directory.begin_fetch().unwrap();
        let redirect = complete(&mut directory, pending, &backend, &mut session, &mut guard).await;

        assert_eq!(redirect, Some(LOGIN_PATH));
        assert!(!session.is_authenticated());
        assert!(storage.load().unwrap().is_none());
        assert_eq!(guard.state(), GuardState::Unauthorized);
        assert_eq!(directory.notice(), None);
    }

    #[tokio::test]
    async fn test_fetch_without_token_makes_no_call() {
        let backend = MockBackend::ok(json!([]));
        let mut session = SessionStore::new(MemoryStore::new());
        session.hydrate();
        let mut guard = RouteGuard::new();
        let mut directory = Directory::new();

        let pending = directory.begin_fetch().unwrap();
        let redirect = complete(&mut directory, pending, &backend, &mut session, &mut guard).await;
        assert_eq!(redirect, Some(LOGIN_PATH));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_not_found_is_empty_result() {
        let backend = MockBackend::status(404, json!({ "message": "not found" }));
        let (_, mut session, mut guard) = signed_in("abc");
        let mut directory = Directory::new();
        directory.set_criterion(SearchField::City, "Riyadh");

        let pending = directory.begin_search().unwrap();
        let redirect = complete(&mut directory, pending, &backend, &mut session, &mut guard).await;

        assert_eq!(redirect, None);
        assert!(directory.records().is_empty());
        assert_eq!(directory.mode(), Mode::Search);
        let notice = directory.notice().unwrap();
        assert_eq!(notice.text(), "لا يوجد نتائج مطابقة");
        assert!(!notice.is_error());
        assert!(session.is_authenticated());
        assert_eq!(
            backend.calls(),
            vec![Call::Search(
                "abc".to_string(),
                vec![("city", "Riyadh".to_string())]
            )]
        );
    }

    #[test]
    fn test_empty_search_is_rejected_locally() {
        let mut directory = Directory::new();
        directory.set_criterion(SearchField::SchoolName, "   ");

        assert_eq!(directory.begin_search(), None);
        assert_eq!(directory.notice(), Some(&Notice::NeedCriterion));
        assert_eq!(directory.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_search_zero_records_behaves_like_not_found() {
        let backend = MockBackend::ok(json!({ "results": [] }));
        let (_, mut session, mut guard) = signed_in("abc");
        let mut directory = Directory::new();
        directory.set_criterion(SearchField::Email, "x@example.com");

        let pending = directory.begin_search().unwrap();
        let _ = complete(&mut directory, pending, &backend, &mut session, &mut guard).await;
        assert_eq!(directory.notice(), Some(&Notice::NoResults));
    }

    #[test]
    fn test_other_failures_surface_message() {
        let mut directory = Directory::new();
        let pending = directory.begin_fetch().unwrap();
        let access = directory.finish(pending.ticket(), Err(ApiError::from_status(503, "")));
        assert_eq!(access, Access::Granted);
        assert_eq!(
            directory.notice(),
            Some(&Notice::Failed("حدث خطأ ما".to_string()))
        );

        directory.set_criterion(SearchField::City, "Riyadh");
        let pending = directory.begin_search().unwrap();
        let _ = directory.finish(
            pending.ticket(),
            Err(ApiError::from_status(500, r#"{"message":"db down"}"#)),
        );
        assert_eq!(directory.notice().map(Notice::text), Some("db down"));
    }

    #[test]
    fn test_in_flight_blocks_new_requests() {
        let mut directory = Directory::new();
        assert!(directory.begin_fetch().is_some());
        assert!(directory.begin_fetch().is_none());
        directory.set_criterion(SearchField::City, "Riyadh");
        assert_eq!(directory.begin_search(), None);
        assert!(directory.is_busy());
    }

    #[test]
    fn test_reset_during_fetch_keeps_listing() {
        let mut directory = Directory::new();
        let pending = directory.begin_fetch().unwrap();
        directory.reset();
        assert_eq!(directory.phase(), Phase::Loading);

        let _ = directory.finish(pending.ticket(), Ok(vec![school("a"), school("b")]));
        assert_eq!(directory.records().len(), 2);
        assert_eq!(directory.all_records().len(), 2);
        assert_eq!(directory.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_restores_listing_and_drops_late_response() {
        let all: Vec<SchoolRecord> = (0..3).map(|i| school(&format!("s{i}"))).collect();
        let mut directory = Directory::new();
        let pending = directory.begin_fetch().unwrap();
        let _ = directory.finish(pending.ticket(), Ok(all.clone()));

        directory.set_criterion(SearchField::SchoolName, "s1");
        let pending = directory.begin_search().unwrap();
        let _ = directory.finish(pending.ticket(), Ok(vec![all[1].clone()]));
        assert_eq!(directory.records().len(), 1);

        directory.set_criterion(SearchField::SchoolName, "s2");
        let late = directory.begin_search().unwrap();
        directory.reset();
        assert_eq!(directory.records(), &all[..]);
        assert_eq!(directory.criteria(), &SearchCriteria::default());
        assert_eq!(directory.mode(), Mode::All);

        // The search answered after the reset and must not replace the listing
        let _ = directory.finish(late.ticket(), Ok(Vec::new()));
        assert_eq!(directory.records(), &all[..]);
        assert_eq!(directory.notice(), None);
    }

    #[test]
    fn test_superseded_search_response_is_dropped() {
        let mut directory = Directory::new();
        directory.set_criterion(SearchField::City, "Riyadh");
        let riyadh = directory.begin_search().unwrap();
        directory.reset();

        directory.set_criterion(SearchField::City, "Jeddah");
        let jeddah = directory.begin_search().unwrap();
        assert_ne!(riyadh.ticket(), jeddah.ticket());

        // Riyadh answers while the Jeddah search is in flight
        let _ = directory.finish(riyadh.ticket(), Ok(vec![school("riyadh-school")]));
        assert!(directory.records().is_empty());
        assert_eq!(directory.phase(), Phase::Searching);

        let _ = directory.finish(jeddah.ticket(), Ok(vec![school("jeddah-school")]));
        assert_eq!(directory.records().len(), 1);
        assert_eq!(directory.records()[0].id, "jeddah-school");
        assert_eq!(directory.criteria().city, "Jeddah");
        assert!(!directory.is_busy());
    }
}
