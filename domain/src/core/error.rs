//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown vendor prefix in model id: {0}")]
    UnknownVendor(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vendor_display() {
        let error = DomainError::UnknownVendor("foo.bar-v1".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown vendor prefix in model id: foo.bar-v1"
        );
    }
}
