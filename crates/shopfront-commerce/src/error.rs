//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A price string could not be parsed into an amount.
    #[error("Invalid price {input:?}: {reason}")]
    InvalidPrice { input: String, reason: String },

    /// A price bucket label did not match any known bucket.
    #[error("Unknown price bucket: {0}")]
    UnknownPriceBucket(String),

    /// A rating threshold was outside 1..=5 or not a number.
    #[error("Invalid rating threshold: {0}")]
    InvalidRatingThreshold(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommerceError {
    pub(crate) fn invalid_price(input: &str, reason: impl Into<String>) -> Self {
        CommerceError::InvalidPrice {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
