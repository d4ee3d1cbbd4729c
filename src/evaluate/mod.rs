//! Rental price evaluation.
//!
//! Composes the three resolvers for one request:
//!
//! 1. select the rule bundle for the SKU (or `default`)
//! 2. effective quantity from the quantity tiers
//! 3. handling fee from the fee table, if enabled
//! 4. discounted price from the day schedule
//! 5. totals, reference price and discount percentage
//!
//! The handling fee is added to the total but is never discounted and
//! never counted in the discount comparison.

mod evaluator;
mod types;

pub use evaluator::{evaluate, PricingEvaluator};
pub use types::{RentalRequest, RentalResult};
