//! Query model — the user's current set of search constraints.
//!
//! Every field is explicitly optional: an absent or empty field means
//! "unconstrained", never "matches nothing". That makes `bedrooms: Some(0)`
//! a real threshold, distinct from `None`.
//!
//! A query is a plain value. Callers build one, adjust it with
//! [`Query::toggle_feature`], and hand it to
//! [`SearchEngine::submit`](crate::session::SearchEngine::submit); nothing
//! in the engine mutates it behind the caller's back.

use crate::types::{Amenity, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search constraints for one submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    /// Free-text location filter, matched as a case-insensitive substring.
    /// Empty means unconstrained for matching;
    /// [`SearchEngine::submit`](crate::session::SearchEngine::submit)
    /// additionally requires it to be non-blank.
    pub location: String,
    /// Exact property category, or `None` for any type.
    pub property_type: Option<PropertyType>,
    /// Inclusive price interval, or `None` for any price.
    pub price_range: Option<PriceRange>,
    /// Minimum number of bedrooms (not exact-match).
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms.
    pub bathrooms: Option<u32>,
    /// Minimum floor area in square feet.
    pub min_area: Option<u32>,
    /// Amenity tags the listing must all carry. Empty = no constraint.
    pub features: BTreeSet<Amenity>,
}

impl Query {
    /// Toggle an amenity requirement: present → removed, absent → added.
    ///
    /// The tag set never holds duplicates, so toggling twice restores the
    /// original query.
    #[must_use]
    pub fn toggle_feature(mut self, tag: Amenity) -> Self {
        if !self.features.remove(&tag) {
            self.features.insert(tag);
        }
        self
    }
}

/// Inclusive price interval, `min..=max` in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Parse a `min-max` token, stripping every non-digit character from
    /// each side, so `"$300,000-$600,000"` and `"300000-600000"` parse
    /// identically.
    ///
    /// Total: a token with no separator, a digit-less side, or a value too
    /// large for `u64` yields `None`, leaving the field unconstrained.
    pub fn parse(token: &str) -> Option<Self> {
        let (lo, hi) = token.split_once('-')?;
        Some(Self { min: digits(lo)?, max: digits(hi)? })
    }

    /// Whether `price` falls inside the interval, inclusive on both ends.
    pub fn contains(self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

fn digits(side: &str) -> Option<u64> {
    let cleaned: String = side.chars().filter(char::is_ascii_digit).collect();
    cleaned.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
