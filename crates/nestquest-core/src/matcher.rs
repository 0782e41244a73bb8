//! Matcher — evaluates one listing against one query, field by field.
//!
//! All seven predicate terms AND together, and a query field that is unset
//! or empty is vacuously true. [`filter_catalog`] is a stable filter:
//! output order is catalog order, and the same catalog + query always
//! produce the same result.

use crate::query::Query;
use crate::types::Listing;

/// Whether `listing` satisfies every constraint in `query`.
pub fn matches(listing: &Listing, query: &Query) -> bool {
    if !query.location.is_empty() {
        let needle = query.location.to_lowercase();
        if !listing.location.to_lowercase().contains(&needle) {
            return false;
        }
    }
    if query.property_type.is_some_and(|t| t != listing.property_type) {
        return false;
    }
    if query.price_range.is_some_and(|r| !r.contains(listing.price)) {
        return false;
    }
    if query.bedrooms.is_some_and(|n| listing.features.bedrooms < n) {
        return false;
    }
    if query.bathrooms.is_some_and(|n| listing.features.bathrooms < n) {
        return false;
    }
    if query.min_area.is_some_and(|a| listing.features.area < a) {
        return false;
    }
    query
        .features
        .iter()
        .all(|tag| listing.amenities.contains(tag))
}

/// Apply [`matches`] to every catalog entry, preserving catalog order.
pub fn filter_catalog(catalog: &[Listing], query: &Query) -> Vec<Listing> {
    let results: Vec<Listing> = catalog
        .iter()
        .filter(|listing| matches(listing, query))
        .cloned()
        .collect();
    tracing::debug!(total = catalog.len(), matched = results.len(), "catalog filtered");
    results
}
