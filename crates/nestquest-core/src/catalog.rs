//! Catalog — the static, read-only ordered collection of listings.
//!
//! The catalog is seed data owned by the caller: built-in sample listings,
//! or a JSON file in the same shape. It is shared cheaply between the
//! engine and its background lookups and never mutated.

use crate::types::Listing;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded sample listings
// ---------------------------------------------------------------------------

const SAMPLE_CATALOG: &str = r#"[
  {
    "id": 1,
    "title": "Modern Downtown Apartment",
    "price": 2200,
    "listingType": "rent",
    "propertyType": "apartment",
    "location": "New York, NY",
    "features": { "bedrooms": 2, "bathrooms": 1, "area": 950 },
    "amenities": ["Air Conditioning", "Balcony"],
    "image": "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&q=80"
  },
  {
    "id": 2,
    "title": "Luxury Condo with City View",
    "price": 780000,
    "listingType": "sale",
    "propertyType": "condo",
    "location": "Los Angeles, CA",
    "features": { "bedrooms": 3, "bathrooms": 2, "area": 1800 },
    "amenities": ["Swimming Pool", "Gym", "Security System"],
    "image": "https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&q=80"
  },
  {
    "id": 3,
    "title": "Family Home in Suburbs",
    "price": 450000,
    "listingType": "sale",
    "propertyType": "house",
    "location": "Chicago, IL",
    "features": { "bedrooms": 4, "bathrooms": 3, "area": 2500 },
    "amenities": ["Garden", "Garage", "Fireplace"],
    "image": "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&q=80"
  },
  {
    "id": 4,
    "title": "Cozy Studio Apartment",
    "price": 1400,
    "listingType": "rent",
    "propertyType": "apartment",
    "location": "San Francisco, CA",
    "features": { "bedrooms": 0, "bathrooms": 1, "area": 550 },
    "amenities": ["Air Conditioning"],
    "image": "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&q=80"
  },
  {
    "id": 5,
    "title": "Waterfront Luxury Home",
    "price": 1250000,
    "listingType": "sale",
    "propertyType": "house",
    "location": "Seattle, WA",
    "features": { "bedrooms": 5, "bathrooms": 4, "area": 3800 },
    "amenities": ["Swimming Pool", "Garden", "Security System", "Balcony"],
    "image": "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&q=80"
  }
]"#;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered, immutable sequence of listings. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[Listing]>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    /// The built-in five-listing sample catalog.
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_CATALOG).expect("built-in sample catalog must be valid JSON")
    }

    /// Parse a catalog from a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Ok(Self::new(listings))
    }

    /// Load a catalog file: a JSON array of listings in the sample shape.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn as_slice(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Failure to read or parse a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not a valid JSON listing array")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
