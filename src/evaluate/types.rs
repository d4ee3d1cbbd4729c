//! Request and result records.

use crate::error::{PricingError, Result};

/// Scalar inputs to one evaluation.
///
/// # Examples
///
/// ```
/// use u_rental::evaluate::RentalRequest;
///
/// let request = RentalRequest::new("LIFT-01", 15, 3, 10.0);
/// assert!(request.validate().is_ok());
/// assert!(RentalRequest::new("LIFT-01", 0, 3, 10.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RentalRequest {
    pub sku: String,
    /// Units rented, at least 1.
    pub quantity: u32,
    /// Rental length in days, at least 1.
    pub days: u32,
    /// Undiscounted price of one unit for one day.
    pub base_rate: f64,
}

impl RentalRequest {
    pub fn new(sku: impl Into<String>, quantity: u32, days: u32, base_rate: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            days,
            base_rate,
        }
    }

    /// Checks the input preconditions: quantity and days at least 1, base
    /// rate finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.quantity < 1 {
            return Err(PricingError::InvalidQuantity(self.quantity));
        }
        if self.days < 1 {
            return Err(PricingError::InvalidDays(self.days));
        }
        if !self.base_rate.is_finite() || self.base_rate < 0.0 {
            return Err(PricingError::InvalidBaseRate(self.base_rate));
        }
        Ok(())
    }
}

/// Price breakdown for one evaluation.
///
/// Every field is derived from the request and the rule bundle. Only
/// `discounted_daily_rate` is rounded (to cents); the others keep full
/// precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RentalResult {
    pub sku: String,

    /// Quantity after graduated tier discounts.
    pub effective_qty: f64,

    /// Flat fee, 0 when fees are disabled or no threshold applies.
    pub handling_fee: f64,

    /// Price after tier and day discounts, excluding the fee.
    pub discounted_price: f64,

    /// `discounted_price + handling_fee`.
    pub total: f64,

    /// `base_rate * quantity * days`, using the raw quantity.
    pub original_price: f64,

    /// `original_price - discounted_price`. The fee is not part of it.
    pub total_discount: f64,

    /// `total_discount` as a percentage of `original_price`, 0 when the
    /// original price is 0.
    pub discount_pct: f64,

    /// Discounted price per unit per day, rounded to two decimals.
    pub discounted_daily_rate: f64,
}
