//! Hotel catalog entries and the built-in demo catalog.

use serde::{Deserialize, Serialize};

/// A bookable property in the catalog.
///
/// Catalog entries go out on the wire unmodified, so field names
/// serialize in camelCase to match what the web client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Opaque catalog identifier (`h1`..`h4` for the demo entries).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable location, "City, Country".
    pub location: String,
    /// Nightly rate in whole dollars.
    pub price_per_night: u32,
    /// Rooms currently available.
    pub rooms_available: u32,
    /// Guest rating out of 5.
    pub rating: f64,
    /// Marketing blurb shown on listing cards.
    pub description: String,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Ordered room-type labels; order matters for room-type matching.
    pub room_types: Vec<String>,
}

/// Returns the built-in demo catalog.
///
/// Served directly when no database is configured, and used to seed
/// one when it is.
#[must_use]
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "h1".to_string(),
            name: "Aurora Bay Resort".to_string(),
            location: "Goa, India".to_string(),
            price_per_night: 140,
            rooms_available: 9,
            rating: 4.7,
            description: "Ocean-facing suites with bamboo textures, rooftop pools, and sunset dining.".to_string(),
            amenities: vec![
                "Infinity pool".to_string(),
                "Spa".to_string(),
                "Ocean view".to_string(),
                "Airport shuttle".to_string(),
            ],
            room_types: vec![
                "Deluxe Suite".to_string(),
                "Ocean Villa".to_string(),
                "Family Studio".to_string(),
            ],
        },
        Hotel {
            id: "h2".to_string(),
            name: "Skyline Atelier Hotel".to_string(),
            location: "Dubai, UAE".to_string(),
            price_per_night: 210,
            rooms_available: 5,
            rating: 4.8,
            description: "Sky-lounge lobby with AI-powered lighting, smart rooms, and curated art walks.".to_string(),
            amenities: vec![
                "Smart rooms".to_string(),
                "Sky lounge".to_string(),
                "Private dining".to_string(),
                "Concierge".to_string(),
            ],
            room_types: vec![
                "Executive King".to_string(),
                "Panorama Suite".to_string(),
                "Residence Loft".to_string(),
            ],
        },
        Hotel {
            id: "h3".to_string(),
            name: "Forestline Retreat".to_string(),
            location: "Kandy, Sri Lanka".to_string(),
            price_per_night: 95,
            rooms_available: 12,
            rating: 4.5,
            description: "Wellness-forward cabins with biophilic design, yoga decks, and herbal cuisine.".to_string(),
            amenities: vec![
                "Wellness deck".to_string(),
                "Yoga studio".to_string(),
                "Nature trails".to_string(),
                "Tea lounge".to_string(),
            ],
            room_types: vec![
                "Garden Cabin".to_string(),
                "Hilltop Suite".to_string(),
                "Retreat Villa".to_string(),
            ],
        },
        Hotel {
            id: "h4".to_string(),
            name: "Harborlight Boutique".to_string(),
            location: "Lisbon, Portugal".to_string(),
            price_per_night: 160,
            rooms_available: 7,
            rating: 4.6,
            description: "Art-deco restoration with tiled courtyards, craft cocktails, and co-working.".to_string(),
            amenities: vec![
                "Rooftop bar".to_string(),
                "Coworking".to_string(),
                "Boutique spa".to_string(),
                "City tours".to_string(),
            ],
            room_types: vec![
                "Classic Queen".to_string(),
                "Corner Suite".to_string(),
                "Design Loft".to_string(),
            ],
        },
    ]
}
