//! Domain-specific assertion macros and helpers for nestquest harnesses.
//!
//! Failure messages name the violated search invariant rather than dumping
//! whole listings.

use nestquest_core::Listing;

/// Assert that a result sequence contains exactly the listing ids given, in
/// order.
///
/// ```rust
/// assert_result_ids!(results, [3, 5]);
/// ```
#[macro_export]
macro_rules! assert_result_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let results: &[nestquest_core::Listing] = &$results;
        let actual: Vec<u32> = results.iter().map(|l| l.id).collect();
        let expected: Vec<u32> = vec![$($id),*];
        if actual != expected {
            panic!(
                "assert_result_ids! failed:\n  expected ids: {:?}\n  actual ids:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert that every listing in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |l| l.features.bedrooms >= 4);
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[nestquest_core::Listing] = &$results;
        let pred = $pred;
        let failing: Vec<u32> = results.iter().filter(|l| !pred(l)).map(|l| l.id).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: listings {:?} did not satisfy the predicate ({} of {} checked)",
                failing,
                failing.len(),
                results.len()
            );
        }
    }};
}

/// Assert that `results` is an ordered subsequence of `catalog` — the
/// filter must never fabricate or reorder listings.
pub fn assert_subsequence_of(results: &[Listing], catalog: &[Listing]) {
    let mut pos = 0usize;
    for listing in results {
        match catalog[pos..].iter().position(|c| c.id == listing.id) {
            Some(offset) => pos += offset + 1,
            None => panic!(
                "result id {} does not appear in the catalog after position {} — \
                 output is not an ordered subsequence",
                listing.id, pos
            ),
        }
    }
}
