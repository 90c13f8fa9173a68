//! Budget-matched hotel picks with a templated pitch line.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use smartstay_catalog::Hotel;

/// Nightly budget assumed when the request carries none.
pub const DEFAULT_BUDGET: f64 = 150.0;

/// Recommendation request fields, all optional.
///
/// `budget` and `guests` stay untyped: the web client sends whatever its
/// form state holds, numbers and numeric strings both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendQuery {
    pub budget: Option<JsonValue>,
    pub guests: Option<JsonValue>,
    pub dates: Option<String>,
    pub preferences: Option<String>,
}

/// A picked hotel with a one-line pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub hotel: String,
    pub message: String,
}

/// Coerces loosely typed budget input to a nightly rate.
///
/// Numbers pass through and numeric strings parse; anything absent,
/// zero, or unparseable falls back to [`DEFAULT_BUDGET`].
#[must_use]
pub fn coerce_budget(value: Option<&JsonValue>) -> f64 {
    let parsed = match value {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(budget) if budget != 0.0 && !budget.is_nan() => budget,
        _ => DEFAULT_BUDGET,
    }
}

fn render_guests(value: Option<&JsonValue>) -> String {
    match value {
        Some(JsonValue::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
        Some(JsonValue::String(s)) if !s.is_empty() => s.clone(),
        _ => "2".to_string(),
    }
}

/// Picks the first hotel at or under budget, or the first hotel at all
/// when nothing fits, and writes the pitch line. Returns `None` only
/// for an empty catalog.
#[must_use]
pub fn recommend(hotels: &[Hotel], query: &RecommendQuery) -> Option<Recommendation> {
    let budget = coerce_budget(query.budget.as_ref());
    let pick = hotels
        .iter()
        .find(|hotel| f64::from(hotel.price_per_night) <= budget)
        .or_else(|| hotels.first())?;

    let guests = render_guests(query.guests.as_ref());
    let dates = match query.dates.as_deref() {
        Some(dates) if !dates.is_empty() => dates,
        _ => "your dates",
    };
    let amenity = pick
        .amenities
        .first()
        .map_or("comfortable rooms", String::as_str);

    let mut message = format!(
        "For {guests} guests during {dates}, {name} fits your budget and offers {amenity}. ",
        name = pick.name,
    );
    if let Some(preferences) = query.preferences.as_deref() {
        if !preferences.is_empty() {
            message.push_str(&format!(
                "It also matches your preference for {preferences}."
            ));
        }
    }

    Some(Recommendation {
        hotel: pick.name.clone(),
        message,
    })
}
