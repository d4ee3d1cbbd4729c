//! Error types for rental pricing.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PricingError>;

/// Pricing errors
#[derive(Error, Debug)]
pub enum PricingError {
    /// Neither the requested SKU nor the `default` bundle exists.
    #[error("no pricing rules for sku '{sku}' and no default entry")]
    UnknownConfiguration { sku: String },

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("days must be at least 1, got {0}")]
    InvalidDays(u32),

    #[error("base rate must be finite and non-negative, got {0}")]
    InvalidBaseRate(f64),

    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("invalid rule-set document: {0}")]
    Document(String),
}
