//! Search session lifecycle — validation, simulated latency, and the
//! stale-completion guard.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──submit──► Pending ──latency──► Succeeded
//!   │
//!   └── blank location: rejected, no transition
//! ```
//!
//! A new `submit` supersedes any pending session. Session ids increase
//! monotonically, and a completing lookup only publishes while its id is
//! still the newest, so at most one result is observable per burst of
//! submissions regardless of completion timing.
//!
//! Lifecycle notifications flow to the caller over a `tokio` mpsc channel;
//! the snapshot accessors ([`SearchEngine::status`],
//! [`SearchEngine::results`]) read the same state the channel reports.

use crate::catalog::Catalog;
use crate::matcher::filter_catalog;
use crate::query::Query;
use crate::types::Listing;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

/// Simulated external-lookup latency applied to every accepted search.
pub const SEARCH_LATENCY: Duration = Duration::from_millis(1500);

// ---------------------------------------------------------------------------
// Session vocabulary
// ---------------------------------------------------------------------------

/// Identifier of one submitted search. Monotonically increasing per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the current session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has been accepted yet.
    #[default]
    Idle,
    /// A search is waiting on the simulated lookup.
    Pending,
    /// The lookup completed; the result sequence (possibly empty) is visible.
    Succeeded,
    /// Terminal state a caller records for a rejected submission. The
    /// engine itself never enters it: validation failures leave session
    /// state untouched and are reported through [`SearchError`].
    Failed,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Idle => write!(f, "idle"),
            SearchStatus::Pending => write!(f, "pending"),
            SearchStatus::Succeeded => write!(f, "succeeded"),
            SearchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Classification of a completed search. Both variants are success, not
/// failure; they drive different caller-facing notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one listing matched, in catalog order.
    Found(Vec<Listing>),
    /// Nothing matched the query.
    Empty,
}

impl SearchOutcome {
    /// Number of matched listings.
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Found(listings) => listings.len(),
            SearchOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }
}

/// Lifecycle notifications published on the engine's event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// An accepted submission entered the pending state.
    Pending { session: SessionId },
    /// The newest session's lookup completed. Superseded sessions never
    /// produce this event.
    Completed {
        session: SessionId,
        outcome: SearchOutcome,
    },
}

/// Rejection reported by [`SearchEngine::submit`] before any work is
/// scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query's location was blank after trimming.
    #[error("a location is required to search")]
    LocationRequired,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct SessionState {
    /// Id of the most recently accepted submission; 0 = none yet.
    newest: u64,
    status: SearchStatus,
    query: Option<Query>,
    results: Vec<Listing>,
}

/// The search engine: owns the catalog, the session state, and the sending
/// half of the event channel. Cloning shares all three.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    latency: Duration,
    state: Arc<Mutex<SessionState>>,
    events: mpsc::UnboundedSender<SearchEvent>,
}

impl SearchEngine {
    /// Engine with the default [`SEARCH_LATENCY`]. Returns the engine and
    /// the receiving end of its event channel.
    pub fn new(catalog: Catalog) -> (Self, mpsc::UnboundedReceiver<SearchEvent>) {
        Self::with_latency(catalog, SEARCH_LATENCY)
    }

    /// Engine with a caller-chosen latency. Tests pair this with the paused
    /// tokio clock.
    pub fn with_latency(
        catalog: Catalog,
        latency: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let engine = Self {
            catalog,
            latency,
            state: Arc::default(),
            events,
        };
        (engine, rx)
    }

    /// Submit a query, starting a fresh session that supersedes any pending
    /// one.
    ///
    /// A blank location is rejected with [`SearchError::LocationRequired`]
    /// and session state is left untouched: no transition, no event, no
    /// scheduled work. Must be called from within a tokio runtime; the
    /// lookup runs on a spawned task after the simulated latency.
    pub fn submit(&self, query: Query) -> Result<SessionId, SearchError> {
        if query.location.trim().is_empty() {
            tracing::debug!("submit rejected: blank location");
            return Err(SearchError::LocationRequired);
        }

        let session = {
            let mut state = self.lock();
            state.newest += 1;
            state.status = SearchStatus::Pending;
            state.query = Some(query.clone());
            SessionId(state.newest)
        };
        tracing::debug!(%session, location = %query.location, "search pending");
        let _ = self.events.send(SearchEvent::Pending { session });

        let engine = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(engine.latency).await;
            engine.complete(session, &query);
        });

        Ok(session)
    }

    /// Run the lookup for `session` and publish, unless a newer submission
    /// has superseded it in the meantime.
    fn complete(&self, session: SessionId, query: &Query) {
        let results = filter_catalog(self.catalog.as_slice(), query);

        let mut state = self.lock();
        if state.newest != session.0 {
            tracing::debug!(%session, newest = state.newest, "stale completion dropped");
            return;
        }
        state.status = SearchStatus::Succeeded;
        state.results = results.clone();
        drop(state);

        let outcome = if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(results)
        };
        tracing::debug!(%session, matched = outcome.len(), "search completed");
        let _ = self.events.send(SearchEvent::Completed { session, outcome });
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SearchStatus {
        self.lock().status
    }

    /// Id of the most recently accepted session, if any.
    pub fn current_session(&self) -> Option<SessionId> {
        let state = self.lock();
        (state.newest > 0).then(|| SessionId(state.newest))
    }

    /// The last published result sequence. Empty until a search succeeds.
    pub fn results(&self) -> Vec<Listing> {
        self.lock().results.clone()
    }

    /// The query recorded by the most recent accepted submission.
    pub fn query(&self) -> Option<Query> {
        self.lock().query.clone()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }
}
