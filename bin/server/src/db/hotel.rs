//! Postgres-backed hotel catalog.

use async_trait::async_trait;
use smartstay_catalog::{CatalogError, Hotel, HotelStore};
use sqlx::{FromRow, PgPool};

/// Row type for hotel queries.
#[derive(FromRow)]
struct HotelRow {
    id: String,
    name: String,
    location: String,
    price_per_night: i32,
    rooms_available: i32,
    rating: f64,
    description: String,
    amenities: serde_json::Value,
    room_types: serde_json::Value,
}

impl HotelRow {
    fn into_hotel(self) -> Hotel {
        Hotel {
            id: self.id,
            name: self.name,
            location: self.location,
            price_per_night: u32::try_from(self.price_per_night).unwrap_or_default(),
            rooms_available: u32::try_from(self.rooms_available).unwrap_or_default(),
            rating: self.rating,
            description: self.description,
            amenities: serde_json::from_value(self.amenities).unwrap_or_default(),
            room_types: serde_json::from_value(self.room_types).unwrap_or_default(),
        }
    }
}

/// Postgres-backed catalog store.
///
/// The migration seeds the demo catalog, so a fresh database serves
/// the same entries as [`smartstay_catalog::MemoryHotelStore`].
pub struct PgHotelStore {
    pool: PgPool,
}

impl PgHotelStore {
    /// Creates a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for PgHotelStore {
    async fn list(&self) -> Result<Vec<Hotel>, CatalogError> {
        // Catalog order is id order (h1..h4 for the demo entries).
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, location, price_per_night, rooms_available, rating,
                   description, amenities, room_types
            FROM hotels
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::StorageFailed {
            reason: e.to_string(),
        })?;

        Ok(rows.into_iter().map(HotelRow::into_hotel).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Hotel>, CatalogError> {
        let row: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, location, price_per_night, rooms_available, rating,
                   description, amenities, room_types
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::StorageFailed {
            reason: e.to_string(),
        })?;

        Ok(row.map(HotelRow::into_hotel))
    }
}
