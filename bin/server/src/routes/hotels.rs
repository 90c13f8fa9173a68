//! Catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use smartstay_catalog::Hotel;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// `GET /api/hotels`
pub async fn list_hotels(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Hotel>>, ApiError> {
    let hotels = state.hotels.list().await?;
    Ok(Json(hotels))
}

/// `GET /api/hotels/{id}`
pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, ApiError> {
    let hotel = state
        .hotels
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Hotel not found"))?;
    Ok(Json(hotel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn lists_the_catalog_in_order() {
        let state = test_state();
        let Json(hotels) = list_hotels(State(state)).await.expect("list");
        assert_eq!(hotels.len(), 4);
        assert_eq!(hotels[0].id, "h1");
        assert_eq!(hotels[0].name, "Aurora Bay Resort");
    }

    #[tokio::test]
    async fn fetches_one_hotel() {
        let state = test_state();
        let Json(hotel) = get_hotel(State(state), Path("h2".to_string()))
            .await
            .expect("get");
        assert_eq!(hotel.name, "Skyline Atelier Hotel");
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let state = test_state();
        let err = get_hotel(State(state), Path("h99".to_string()))
            .await
            .expect_err("missing hotel");
        assert_eq!(err, ApiError::not_found("Hotel not found"));
    }
}
