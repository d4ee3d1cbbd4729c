//! Pricing rule sets.
//!
//! A [`RuleSet`] maps SKUs to [`RuleBundle`]s and always falls back to the
//! `default` entry. A bundle combines three independent tables:
//!
//! - **Quantity tiers**: graduated per-unit discounts, sorted by `from`.
//! - **Day anchors**: discounts that activate on a day index and persist.
//! - **Handling fees**: quantity thresholds gated by a flag.
//!
//! Rule sets are plain data. Loading and storing them is left to the
//! caller; with the `serde` feature they (de)serialize with the camelCase
//! field names of the stored document.

mod types;
mod validate;

#[cfg(feature = "serde")]
pub use types::PricingDocument;
pub use types::{DayAnchor, FeeRow, QuantityTier, RuleBundle, RuleSet, DEFAULT_SKU};
pub use validate::{RuleIssue, RuleIssueKind};
