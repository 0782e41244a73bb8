//! nestquest-core — property catalog search engine.
//!
//! This crate exposes the engine's layers as public modules, plus the
//! shared domain types used across them.
//!
//! # Architecture
//!
//! ```text
//! Query ──► Matcher ──► Session ──► events ──► caller
//! Places ──► Suggestions ────────────────────► caller
//! ```
//!
//! The matcher and the suggestion index are pure functions over immutable
//! data. The session layer owns the only mutable state — the lifecycle of
//! the current search — and publishes its transitions over a `tokio`
//! channel, guarding against stale completions when submissions overlap.

pub mod catalog;
pub mod config;
pub mod matcher;
pub mod query;
pub mod session;
pub mod suggest;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use matcher::{filter_catalog, matches};
pub use query::{PriceRange, Query};
pub use session::{
    SearchEngine, SearchError, SearchEvent, SearchOutcome, SearchStatus, SessionId,
    SEARCH_LATENCY,
};
pub use suggest::SuggestionIndex;
pub use types::{Amenity, Features, Listing, ListingType, PropertyType};
