//! Free-text hotel search with cross-site price comparison.
//!
//! Powers the reservation agent's search box. A query like
//! "Find hotels in Goa under 200" is reduced to an optional price cap
//! plus a set of location terms, matched against the catalog, and each
//! match is decorated with simulated nightly rates across the major
//! booking sites.

use crate::hotel::Hotel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BUDGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)under\s+\$?(\d+)").expect("valid regex"));

/// Booking sites quoted in price comparisons.
pub const BOOKING_SITES: [&str; 8] = [
    "StayGenie",
    "RoomRadar",
    "BookNest",
    "TravelHive",
    "LodgeSpot",
    "FarePoint",
    "SuiteSeeker",
    "GlobeStays",
];

/// Query words that never name a place.
const STOPWORDS: [&str; 23] = [
    "and", "around", "best", "book", "budget", "cheap", "find", "for", "guest", "guests", "hotel",
    "hotels", "near", "night", "nights", "per", "room", "rooms", "show", "stay", "the", "under",
    "with",
];

/// What a free-text query asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Maximum nightly rate, from an `under <amount>` phrase.
    pub budget: Option<u32>,
    /// Lowercased location terms matched against hotel name and location.
    pub terms: Vec<String>,
}

impl SearchCriteria {
    /// Parses a free-text query into search criteria.
    ///
    /// The first `under <digits>` phrase (optional `$`) sets the budget.
    /// Remaining alphabetic tokens of three or more characters become
    /// location terms, minus common filler words.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let budget = BUDGET_RE
            .captures(query)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        let terms = query
            .split(|c: char| !c.is_ascii_alphabetic())
            .map(str::to_lowercase)
            .filter(|token| token.len() >= 3 && !STOPWORDS.contains(&token.as_str()))
            .collect();

        Self { budget, terms }
    }
}

/// One site's nightly rate for a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteQuote {
    /// Booking site name.
    pub site: String,
    /// Nightly rate in whole dollars.
    pub price: u32,
}

/// A catalog match decorated with cross-site pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    /// The matched catalog entry, flattened into the offer.
    #[serde(flatten)]
    pub hotel: Hotel,
    /// Cheapest of the site quotes.
    pub best_deal: SiteQuote,
    /// Quotes across all booking sites.
    pub comparisons: Vec<SiteQuote>,
}

impl HotelOffer {
    fn quote(hotel: &Hotel) -> Self {
        let comparisons: Vec<SiteQuote> = BOOKING_SITES
            .iter()
            .map(|site| SiteQuote {
                site: (*site).to_string(),
                price: quoted_price(hotel, site),
            })
            .collect();

        let best_deal = comparisons
            .iter()
            .min_by_key(|quote| quote.price)
            .cloned()
            .expect("BOOKING_SITES is non-empty");

        Self {
            hotel: hotel.clone(),
            best_deal,
            comparisons,
        }
    }
}

/// Aggregate statistics over the matched hotels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub total_hotels: u32,
    pub min_price: u32,
    pub max_price: u32,
    pub avg_price: u32,
}

impl SearchSummary {
    fn over(hotels: &[&Hotel]) -> Self {
        if hotels.is_empty() {
            return Self {
                total_hotels: 0,
                min_price: 0,
                max_price: 0,
                avg_price: 0,
            };
        }

        let mut min_price = u32::MAX;
        let mut max_price = 0;
        let mut total: u64 = 0;
        for hotel in hotels {
            min_price = min_price.min(hotel.price_per_night);
            max_price = max_price.max(hotel.price_per_night);
            total += u64::from(hotel.price_per_night);
        }

        Self {
            total_hotels: hotels.len() as u32,
            min_price,
            max_price,
            avg_price: (total as f64 / hotels.len() as f64).round() as u32,
        }
    }
}

/// Search response: summary plus per-hotel offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub summary: SearchSummary,
    pub hotels: Vec<HotelOffer>,
}

/// Runs a search over the catalog.
///
/// Location terms narrow the catalog first; if none of them match
/// anything, the whole catalog is kept rather than returning an empty
/// page for a typo. The budget cap then filters strictly, so an
/// unaffordable search can legitimately come back empty.
#[must_use]
pub fn search(hotels: &[Hotel], criteria: &SearchCriteria) -> SearchResults {
    let located: Vec<&Hotel> = if criteria.terms.is_empty() {
        hotels.iter().collect()
    } else {
        let matched: Vec<&Hotel> = hotels
            .iter()
            .filter(|hotel| matches_terms(hotel, &criteria.terms))
            .collect();
        if matched.is_empty() {
            hotels.iter().collect()
        } else {
            matched
        }
    };

    let matched: Vec<&Hotel> = match criteria.budget {
        Some(cap) => located
            .into_iter()
            .filter(|hotel| hotel.price_per_night <= cap)
            .collect(),
        None => located,
    };

    SearchResults {
        summary: SearchSummary::over(&matched),
        hotels: matched.into_iter().map(HotelOffer::quote).collect(),
    }
}

fn matches_terms(hotel: &Hotel, terms: &[String]) -> bool {
    let haystack = format!("{} {}", hotel.name, hotel.location).to_lowercase();
    terms.iter().any(|term| haystack.contains(term))
}

/// Deterministic nightly rate for a hotel on a given site.
///
/// Stable per (hotel, site) pair so repeated searches quote the same
/// prices. Quotes fall within ±15 of the catalog rate.
fn quoted_price(hotel: &Hotel, site: &str) -> u32 {
    // FNV-1a over the hotel ID and site name.
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in hotel.id.bytes().chain(site.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }

    let offset = (hash % 31) as i64 - 15;
    (i64::from(hotel.price_per_night) + offset).clamp(1, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::sample_hotels;

    #[test]
    fn parse_extracts_budget() {
        let criteria = SearchCriteria::parse("Find hotels in Goa under 200");
        assert_eq!(criteria.budget, Some(200));
        assert_eq!(criteria.terms, vec!["goa"]);
    }

    #[test]
    fn parse_budget_with_dollar_sign() {
        let criteria = SearchCriteria::parse("anywhere under $150 please");
        assert_eq!(criteria.budget, Some(150));
    }

    #[test]
    fn parse_without_budget() {
        let criteria = SearchCriteria::parse("hotels in Lisbon");
        assert_eq!(criteria.budget, None);
        assert_eq!(criteria.terms, vec!["lisbon"]);
    }

    #[test]
    fn parse_drops_filler_and_short_tokens() {
        let criteria = SearchCriteria::parse("Show me the best hotels");
        assert!(criteria.terms.is_empty());
    }

    #[test]
    fn empty_query_matches_whole_catalog() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse(""));
        assert_eq!(results.summary.total_hotels, 4);
        assert_eq!(results.summary.min_price, 95);
        assert_eq!(results.summary.max_price, 210);
        // (140 + 210 + 95 + 160) / 4 = 151.25, rounded
        assert_eq!(results.summary.avg_price, 151);
    }

    #[test]
    fn location_term_narrows_results() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("hotels in Dubai"));
        assert_eq!(results.summary.total_hotels, 1);
        assert_eq!(results.hotels[0].hotel.id, "h2");
    }

    #[test]
    fn term_matches_hotel_name_too() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("skyline"));
        assert_eq!(results.summary.total_hotels, 1);
        assert_eq!(results.hotels[0].hotel.id, "h2");
    }

    #[test]
    fn unmatched_terms_fall_back_to_full_catalog() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("hotels in Paris"));
        assert_eq!(results.summary.total_hotels, 4);
    }

    #[test]
    fn budget_cap_filters_strictly() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("hotels under 100"));
        assert_eq!(results.summary.total_hotels, 1);
        assert_eq!(results.hotels[0].hotel.id, "h3");
    }

    #[test]
    fn unaffordable_search_returns_empty_summary() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("Goa under 100"));
        assert_eq!(results.summary.total_hotels, 0);
        assert_eq!(results.summary.min_price, 0);
        assert_eq!(results.summary.avg_price, 0);
        assert!(results.hotels.is_empty());
    }

    #[test]
    fn every_offer_quotes_eight_sites() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse(""));
        for offer in &results.hotels {
            assert_eq!(offer.comparisons.len(), BOOKING_SITES.len());
        }
    }

    #[test]
    fn best_deal_is_cheapest_quote() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse(""));
        for offer in &results.hotels {
            let cheapest = offer
                .comparisons
                .iter()
                .map(|quote| quote.price)
                .min()
                .expect("quotes exist");
            assert_eq!(offer.best_deal.price, cheapest);
        }
    }

    #[test]
    fn quotes_are_stable_across_searches() {
        let hotels = sample_hotels();
        let first = search(&hotels, &SearchCriteria::parse("Goa"));
        let second = search(&hotels, &SearchCriteria::parse("Goa"));
        assert_eq!(first, second);
    }

    #[test]
    fn offer_serializes_flat_with_camel_case_deal() {
        let hotels = sample_hotels();
        let results = search(&hotels, &SearchCriteria::parse("Goa"));
        let json = serde_json::to_value(&results.hotels[0]).expect("serialize");
        assert_eq!(json["id"], "h1");
        assert_eq!(json["pricePerNight"], 140);
        assert!(json["bestDeal"]["site"].is_string());
        assert_eq!(json["comparisons"].as_array().map(Vec::len), Some(8));
    }
}
