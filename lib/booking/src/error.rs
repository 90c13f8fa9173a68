//! Error types for the booking crate.

use std::fmt;

/// Errors from booking storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Storage operation failed.
    StorageFailed { reason: String },
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageFailed { reason } => {
                write!(f, "booking storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for BookingError {}
