//! Rule-driven rental pricing.
//!
//! Prices a multi-day equipment rental under a rule set that combines:
//!
//! - **Quantity tiers**: graduated per-unit discounts that turn a raw
//!   quantity into an effective quantity.
//! - **Day schedule**: discounts that activate on a day index and stay
//!   active for the rest of the rental.
//! - **Handling fees**: a flat, quantity-gated surcharge that is added to
//!   the total but never discounted.
//!
//! Evaluation is a pure function of the rule set and the request. It holds
//! no state, does no I/O, and can be called from any number of threads on
//! a shared [`rules::RuleSet`].
//!
//! # Modules
//!
//! - [`rules`]: rule-set data model and validation
//! - [`tier`], [`schedule`], [`fee`]: the three resolvers
//! - [`evaluate`]: composes the resolvers into a [`evaluate::RentalResult`]
//! - [`sweep`]: one-axis series of evaluations for plotting
//!
//! # Features
//!
//! - `serde`: (de)serialization of rule sets and results, JSON loading
//! - `parallel` (default): rayon-backed sweeps

pub mod error;
pub mod evaluate;
pub mod fee;
pub mod rules;
pub mod schedule;
pub mod sweep;
pub mod tier;

pub use error::{PricingError, Result};
pub use evaluate::evaluate;
