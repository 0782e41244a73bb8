//! Static catalogs used across harnesses.
//!
//! The five-listing sample catalog is the engine's built-in seed; the spec
//! examples in the matcher harness all refer to it by listing id:
//!
//! | id | title | price | type | location | bd/ba/sqft |
//! |----|-------|-------|------|----------|------------|
//! | 1 | Modern Downtown Apartment | 2 200/mo | apartment | New York, NY | 2/1/950 |
//! | 2 | Luxury Condo with City View | 780 000 | condo | Los Angeles, CA | 3/2/1800 |
//! | 3 | Family Home in Suburbs | 450 000 | house | Chicago, IL | 4/3/2500 |
//! | 4 | Cozy Studio Apartment | 1 400/mo | apartment | San Francisco, CA | 0/1/550 |
//! | 5 | Waterfront Luxury Home | 1 250 000 | house | Seattle, WA | 5/4/3800 |

use nestquest_core::{Catalog, Listing};

/// The default place list offered by the suggestion index.
pub const PLACES: &[&str] = &[
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
];

/// The built-in sample catalog.
pub fn sample_catalog() -> Catalog {
    Catalog::sample()
}

/// The five sample listings as a plain vec, ids 1–5 in order.
pub fn sample_listings() -> Vec<Listing> {
    Catalog::sample().as_slice().to_vec()
}
