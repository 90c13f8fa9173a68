//! Error types for the assist crate.

use std::fmt;

/// Errors from talking to the chat completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// The HTTP request could not be sent or failed in transit.
    RequestFailed { reason: String },
    /// The provider answered with a body the client could not decode.
    ResponseParseFailed { reason: String },
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => {
                write!(f, "chat request failed: {reason}")
            }
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse chat response: {reason}")
            }
        }
    }
}

impl std::error::Error for AssistError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display() {
        let err = AssistError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn parse_failed_display() {
        let err = AssistError::ResponseParseFailed {
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("parse"));
    }
}
