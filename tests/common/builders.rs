//! Test builders — ergonomic constructors for [`Listing`] fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use nestquest_core::{Amenity, Features, Listing, ListingType, PropertyType};

// ---------------------------------------------------------------------------
// ListingBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Listing`] test fixtures.
///
/// # Example
///
/// ```rust
/// let listing = ListingBuilder::new(7, "Harbor View Condo")
///     .location("Seattle, WA")
///     .property_type(PropertyType::Condo)
///     .price(620_000)
///     .rooms(2, 2, 1100)
///     .amenity(Amenity::Balcony)
///     .build();
/// ```
pub struct ListingBuilder {
    id: u32,
    title: String,
    price: u64,
    listing_type: ListingType,
    property_type: PropertyType,
    location: String,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    amenities: Vec<Amenity>,
}

impl ListingBuilder {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price: 100_000,
            listing_type: ListingType::Sale,
            property_type: PropertyType::House,
            location: "Springfield, IL".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: 1500,
            amenities: Vec::new(),
        }
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = listing_type;
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn rooms(mut self, bedrooms: u32, bathrooms: u32, area: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self.area = area;
        self
    }

    pub fn amenity(mut self, tag: Amenity) -> Self {
        self.amenities.push(tag);
        self
    }

    pub fn build(self) -> Listing {
        Listing {
            id: self.id,
            title: self.title,
            price: self.price,
            listing_type: self.listing_type,
            property_type: self.property_type,
            location: self.location,
            features: Features {
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                area: self.area,
            },
            amenities: self.amenities,
            image: format!("https://example.com/photos/{}.jpg", self.id),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a sale listing at the given location and price.
pub fn sale(id: u32, title: &str, location: &str, price: u64) -> Listing {
    ListingBuilder::new(id, title)
        .location(location)
        .price(price)
        .build()
}

/// Build a rental listing at the given location and monthly price.
pub fn rental(id: u32, title: &str, location: &str, price: u64) -> Listing {
    ListingBuilder::new(id, title)
        .listing_type(ListingType::Rent)
        .property_type(PropertyType::Apartment)
        .location(location)
        .price(price)
        .build()
}
