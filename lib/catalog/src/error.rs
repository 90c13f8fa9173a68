//! Error types for the catalog crate.

use std::fmt;

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Hotel not found.
    HotelNotFound { id: String },
    /// Storage operation failed.
    StorageFailed { reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HotelNotFound { id } => write!(f, "hotel not found: {id}"),
            Self::StorageFailed { reason } => {
                write!(f, "catalog storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_not_found_display() {
        let err = CatalogError::HotelNotFound {
            id: "h9".to_string(),
        };
        assert!(err.to_string().contains("hotel not found"));
        assert!(err.to_string().contains("h9"));
    }
}
