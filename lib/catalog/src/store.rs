//! Catalog lookup trait and the in-memory implementation.

use crate::error::CatalogError;
use crate::hotel::{Hotel, sample_hotels};
use async_trait::async_trait;

/// Read access to the hotel catalog.
///
/// Listing preserves catalog order; the demo catalog and any seeded
/// database agree on that order.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Returns all catalog entries.
    async fn list(&self) -> Result<Vec<Hotel>, CatalogError>;

    /// Looks up a single hotel by its catalog ID.
    async fn get(&self, id: &str) -> Result<Option<Hotel>, CatalogError>;
}

/// In-memory catalog backed by a fixed list of hotels.
///
/// The catalog is immutable after construction, so reads need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct MemoryHotelStore {
    hotels: Vec<Hotel>,
}

impl MemoryHotelStore {
    /// Creates a store seeded with the built-in demo catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hotels: sample_hotels(),
        }
    }

    /// Creates a store over an explicit list of hotels.
    #[must_use]
    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }
}

impl Default for MemoryHotelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelStore for MemoryHotelStore {
    async fn list(&self) -> Result<Vec<Hotel>, CatalogError> {
        Ok(self.hotels.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Hotel>, CatalogError> {
        Ok(self.hotels.iter().find(|hotel| hotel.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_catalog_in_order() {
        let store = MemoryHotelStore::new();
        let hotels = store.list().await.expect("list");
        assert_eq!(hotels.len(), 4);
        assert_eq!(hotels[0].id, "h1");
        assert_eq!(hotels[3].id, "h4");
    }

    #[tokio::test]
    async fn get_known_hotel() {
        let store = MemoryHotelStore::new();
        let hotel = store.get("h2").await.expect("get");
        let hotel = hotel.expect("h2 exists");
        assert_eq!(hotel.name, "Skyline Atelier Hotel");
    }

    #[tokio::test]
    async fn get_unknown_hotel_returns_none() {
        let store = MemoryHotelStore::new();
        let hotel = store.get("h99").await.expect("get");
        assert!(hotel.is_none());
    }
}
