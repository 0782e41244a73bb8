//! Core domain types for nestquest-core — the listing vocabulary.
//!
//! This module defines the data every layer shares: the immutable
//! [`Listing`] record, its [`Features`], and the controlled vocabularies
//! [`ListingType`], [`PropertyType`], and [`Amenity`].
//!
//! Listings serialize with camelCase field names so catalog files match the
//! upstream seed-data shape byte for byte.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One property record in the catalog.
///
/// Listings are seed data owned by the caller: the engine never creates,
/// mutates, or destroys them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique, stable identifier.
    pub id: u32,
    pub title: String,
    /// Asking price in whole dollars. Monthly for rentals.
    pub price: u64,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    /// Free-text location, matched by case-insensitive substring search.
    pub location: String,
    pub features: Features,
    /// Amenity tags carried by the property, in seed-data order.
    pub amenities: Vec<Amenity>,
    /// Photo URI. Opaque to the engine.
    pub image: String,
}

/// Room counts and floor area of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor area in square feet.
    pub area: u32,
}

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingType::Sale => write!(f, "sale"),
            ListingType::Rent => write!(f, "rent"),
        }
    }
}

/// Category of a property. Queries match it exactly, no fuzziness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::House => write!(f, "house"),
            PropertyType::Apartment => write!(f, "apartment"),
            PropertyType::Condo => write!(f, "condo"),
            PropertyType::Townhouse => write!(f, "townhouse"),
            PropertyType::Land => write!(f, "land"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = ParsePropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            "townhouse" => Ok(PropertyType::Townhouse),
            "land" => Ok(PropertyType::Land),
            _ => Err(ParsePropertyTypeError(s.to_string())),
        }
    }
}

/// Error from parsing a [`PropertyType`] token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type {0:?} (expected house, apartment, condo, townhouse, or land)")]
pub struct ParsePropertyTypeError(String);

/// Amenity tag, drawn from the fixed eight-entry vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Amenity {
    #[serde(rename = "Air Conditioning")]
    AirConditioning,
    #[serde(rename = "Swimming Pool")]
    SwimmingPool,
    #[serde(rename = "Garden")]
    Garden,
    #[serde(rename = "Garage")]
    Garage,
    #[serde(rename = "Fireplace")]
    Fireplace,
    #[serde(rename = "Gym")]
    Gym,
    #[serde(rename = "Security System")]
    SecuritySystem,
    #[serde(rename = "Balcony")]
    Balcony,
}

impl Amenity {
    /// Every amenity in the vocabulary, in display order.
    pub const ALL: [Amenity; 8] = [
        Amenity::AirConditioning,
        Amenity::SwimmingPool,
        Amenity::Garden,
        Amenity::Garage,
        Amenity::Fireplace,
        Amenity::Gym,
        Amenity::SecuritySystem,
        Amenity::Balcony,
    ];

    /// Canonical display name, as it appears in catalog files.
    pub fn name(self) -> &'static str {
        match self {
            Amenity::AirConditioning => "Air Conditioning",
            Amenity::SwimmingPool => "Swimming Pool",
            Amenity::Garden => "Garden",
            Amenity::Garage => "Garage",
            Amenity::Fireplace => "Fireplace",
            Amenity::Gym => "Gym",
            Amenity::SecuritySystem => "Security System",
            Amenity::Balcony => "Balcony",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Amenity {
    type Err = ParseAmenityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAmenityError(s.to_string()))
    }
}

/// Error from parsing an [`Amenity`] tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown amenity {0:?} (expected one of: Air Conditioning, Swimming Pool, Garden, \
     Garage, Fireplace, Gym, Security System, Balcony)"
)]
pub struct ParseAmenityError(String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
