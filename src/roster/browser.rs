//! Incremental-load controller for the catalog view.
//!
//! Owns the session-visible roster and drives it through an explicit state
//! machine in response to discrete UI events, emitting render-ready
//! snapshots for a presentation layer.

use crate::api::{initial_roster_url, PokeApi};
use crate::errors::{FetchError, FetchResult};
use crate::roster::fetcher::fetch_page;
use schema::{RosterEntry, RosterPage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifecycle of the incremental roster loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseState {
    /// Nothing loaded yet (also the state after a failed initial load)
    Idle,
    /// Initial page fetch in flight
    Loading,
    /// At least one page loaded and more pages remain
    Ready,
    /// A "load more" fetch in flight
    LoadingMore,
    /// Upstream reported no further pages
    Exhausted,
}

/// Discrete UI triggers the browser reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseEvent {
    /// The catalog view became visible
    RosterOpened,
    /// The scroll sentinel intersected the viewport
    ScrollThresholdReached,
    /// The manual fallback button was pressed
    LoadMoreClicked,
}

/// Which fetch a [`LoadRequest`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Initial,
    More,
}

/// A granted page fetch. Exactly one can exist per in-flight load; settling
/// it through [`RosterBrowser::complete_load`] consumes it.
#[derive(Debug)]
pub struct LoadRequest {
    pub url: String,
    pub kind: LoadKind,
}

/// Result of driving one load operation end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and its entries appended
    Loaded { appended: usize },
    /// The trigger was ignored: a load was already in flight, or the
    /// roster is exhausted
    Suppressed,
}

/// Render-ready snapshot of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub state: BrowseState,
    pub entries: Vec<RosterEntry>,
    pub has_more: bool,
    pub total: u32,
    pub last_error: Option<String>,
}

/// Incremental-load controller for the browsing roster.
///
/// At most one load is in flight at any time: `begin_*` grants a
/// [`LoadRequest`] only from a settled state, so overlapping triggers
/// (scroll sentinel plus the manual button) cannot issue duplicate page
/// fetches. [`Self::complete_load`] clears the guard whether the fetch
/// succeeded or failed.
#[derive(Debug)]
pub struct RosterBrowser {
    state: BrowseState,
    entries: Vec<RosterEntry>,
    initial_url: String,
    next_url: Option<String>,
    total: u32,
    last_error: Option<FetchError>,
}

impl RosterBrowser {
    pub fn new() -> Self {
        Self::with_initial_url(initial_roster_url())
    }

    /// Browser whose first page comes from a non-default listing URL.
    pub fn with_initial_url(url: impl Into<String>) -> Self {
        Self {
            state: BrowseState::Idle,
            entries: Vec::new(),
            initial_url: url.into(),
            next_url: None,
            total: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> BrowseState {
        self.state
    }

    /// Entries loaded so far, in fetch order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn has_more(&self) -> bool {
        !matches!(self.state, BrowseState::Exhausted)
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Map a UI trigger onto the state machine. Returns the fetch the
    /// caller must run, if the event was accepted.
    pub fn handle_event(&mut self, event: BrowseEvent) -> Option<LoadRequest> {
        match event {
            BrowseEvent::RosterOpened => self.begin_initial_load(),
            BrowseEvent::ScrollThresholdReached | BrowseEvent::LoadMoreClicked => {
                self.begin_load_more()
            }
        }
    }

    /// Grant the initial page fetch. `None` unless the browser is idle.
    pub fn begin_initial_load(&mut self) -> Option<LoadRequest> {
        if self.state != BrowseState::Idle {
            return None;
        }
        self.state = BrowseState::Loading;
        Some(LoadRequest { url: self.initial_url.clone(), kind: LoadKind::Initial })
    }

    /// Grant a "load more" fetch. `None` while a load is in flight or once
    /// the roster is exhausted.
    pub fn begin_load_more(&mut self) -> Option<LoadRequest> {
        if self.state != BrowseState::Ready {
            return None;
        }
        let url = self.next_url.clone()?;
        self.state = BrowseState::LoadingMore;
        Some(LoadRequest { url, kind: LoadKind::More })
    }

    /// Settle an in-flight load.
    ///
    /// On success the page is appended (an initial load replaces the empty
    /// roster) and the pagination cursor advances; the absence of a next
    /// cursor exhausts the roster. On failure the prior roster is left
    /// untouched and the error is recorded for the view; recovery is a
    /// manual re-trigger.
    pub fn complete_load(&mut self, request: LoadRequest, result: FetchResult<RosterPage>) {
        match result {
            Ok(page) => {
                match request.kind {
                    LoadKind::Initial => self.entries = page.entries,
                    LoadKind::More => self.entries.extend(page.entries),
                }
                self.total = page.total;
                self.next_url = page.next_url;
                self.last_error = None;
                self.state = if self.next_url.is_some() {
                    BrowseState::Ready
                } else {
                    BrowseState::Exhausted
                };
                debug!(state = ?self.state, entries = self.entries.len(), "load settled");
            }
            Err(err) => {
                self.last_error = Some(err);
                self.state = match request.kind {
                    LoadKind::Initial => BrowseState::Idle,
                    LoadKind::More => BrowseState::Ready,
                };
            }
        }
    }

    /// Drive the initial load end to end.
    pub async fn load_initial(&mut self, api: &impl PokeApi) -> FetchResult<LoadOutcome> {
        match self.begin_initial_load() {
            Some(request) => self.run(api, request).await,
            None => Ok(LoadOutcome::Suppressed),
        }
    }

    /// Drive one "load more" end to end. Suppressed triggers return without
    /// touching the network.
    pub async fn load_more(&mut self, api: &impl PokeApi) -> FetchResult<LoadOutcome> {
        match self.begin_load_more() {
            Some(request) => self.run(api, request).await,
            None => Ok(LoadOutcome::Suppressed),
        }
    }

    async fn run(&mut self, api: &impl PokeApi, request: LoadRequest) -> FetchResult<LoadOutcome> {
        let before = self.entries.len();
        let result = fetch_page(api, &request.url).await;
        let failure = result.as_ref().err().cloned();
        self.complete_load(request, result);
        match failure {
            Some(err) => Err(err),
            None => Ok(LoadOutcome::Loaded { appended: self.entries.len() - before }),
        }
    }

    /// Clone-out snapshot for rendering.
    pub fn snapshot(&self) -> RosterView {
        RosterView {
            state: self.state,
            entries: self.entries.clone(),
            has_more: self.has_more(),
            total: self.total,
            last_error: self.last_error.as_ref().map(|err| err.to_string()),
        }
    }
}

impl Default for RosterBrowser {
    fn default() -> Self {
        Self::new()
    }
}
