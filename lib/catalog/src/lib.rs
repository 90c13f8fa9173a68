//! Hotel catalog for the smartstay platform.
//!
//! Provides the catalog entry type, the built-in demo catalog, the
//! `HotelStore` lookup trait with an in-memory implementation, and the
//! free-text search used by the reservation agent.

pub mod error;
pub mod hotel;
pub mod search;
pub mod store;

pub use error::CatalogError;
pub use hotel::{Hotel, sample_hotels};
pub use search::{HotelOffer, SearchCriteria, SearchResults, SearchSummary, SiteQuote, search};
pub use store::{HotelStore, MemoryHotelStore};
