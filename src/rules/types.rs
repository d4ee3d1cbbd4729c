//! Rule-set data model.

use crate::error::{PricingError, Result};
use std::collections::BTreeMap;

/// SKU key of the fallback bundle every well-formed rule set carries.
pub const DEFAULT_SKU: &str = "default";

/// One graduated quantity tier.
///
/// A tier covers `[from, next.from - 1]`; the last tier is open-ended.
/// Every unit inside the range counts as `1 - discount` effective units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantityTier {
    /// First unit (1-based) covered by this tier.
    pub from: u32,
    /// Proportional per-unit discount in `[0, 1)`.
    pub discount: f64,
}

impl QuantityTier {
    pub fn new(from: u32, discount: f64) -> Self {
        Self { from, discount }
    }
}

/// A handling-fee threshold row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRow {
    /// Minimum quantity at which this row applies.
    pub from: u32,
    /// Flat fee added to the total.
    pub fee: f64,
}

impl FeeRow {
    pub fn new(from: u32, fee: f64) -> Self {
        Self { from, fee }
    }
}

/// A day anchor: the discount that activates on `day` and stays active
/// until a later anchor replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayAnchor {
    /// 1-based day index at which the discount starts.
    pub day: u32,
    /// Discount in `[0, 1)` applied to each day from `day` onwards.
    pub discount: f64,
}

impl DayAnchor {
    pub fn new(day: u32, discount: f64) -> Self {
        Self { day, discount }
    }
}

/// The pricing configuration consumed by one evaluation.
///
/// # Examples
///
/// ```
/// use u_rental::rules::RuleBundle;
///
/// let bundle = RuleBundle::new()
///     .with_tier(1, 0.0)
///     .with_tier(11, 0.1)
///     .with_day_discount(5, 0.2)
///     .with_fee(1, 5.0)
///     .with_handling_fee(true);
///
/// assert_eq!(bundle.quantity_tiers.len(), 2);
/// assert!(bundle.calculate_handling_fee);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RuleBundle {
    /// Tiers sorted ascending by `from`. Not re-sorted during evaluation.
    pub quantity_tiers: Vec<QuantityTier>,

    /// Fee thresholds. The row with the greatest qualifying `from` wins.
    pub handling_fees: Vec<FeeRow>,

    /// When false the fee table is never consulted.
    pub calculate_handling_fee: bool,

    /// Day anchors in any order.
    pub day_discounts: Vec<DayAnchor>,
}

impl RuleBundle {
    /// Creates an empty bundle: no tiers, no fees, no day discounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle with a single undiscounted tier starting at 1.
    pub fn undiscounted() -> Self {
        Self::new().with_tier(1, 0.0)
    }

    /// Appends a quantity tier.
    pub fn with_tier(mut self, from: u32, discount: f64) -> Self {
        self.quantity_tiers.push(QuantityTier::new(from, discount));
        self
    }

    /// Appends a handling-fee row.
    pub fn with_fee(mut self, from: u32, fee: f64) -> Self {
        self.handling_fees.push(FeeRow::new(from, fee));
        self
    }

    /// Enables or disables handling-fee resolution.
    pub fn with_handling_fee(mut self, enabled: bool) -> Self {
        self.calculate_handling_fee = enabled;
        self
    }

    /// Appends a day anchor.
    pub fn with_day_discount(mut self, day: u32, discount: f64) -> Self {
        self.day_discounts.push(DayAnchor::new(day, discount));
        self
    }
}

/// Pricing rules keyed by SKU, with a `default` fallback.
///
/// A rule set is loaded once and treated as immutable; evaluations only
/// borrow it, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_rental::rules::{RuleBundle, RuleSet};
///
/// let rules = RuleSet::new(RuleBundle::undiscounted())
///     .with_sku("LIFT-01", RuleBundle::new().with_tier(1, 0.1));
///
/// assert!(rules.bundle_for("LIFT-01").is_ok());
/// // Unknown SKUs fall back to the default bundle.
/// assert!(rules.bundle_for("TENT-99").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleSet {
    bundles: BTreeMap<String, RuleBundle>,
}

impl RuleSet {
    /// Creates a rule set holding only the `default` bundle.
    pub fn new(default: RuleBundle) -> Self {
        Self::default().with_sku(DEFAULT_SKU, default)
    }

    /// Adds (or replaces) the bundle for `sku`.
    pub fn with_sku(mut self, sku: impl Into<String>, bundle: RuleBundle) -> Self {
        self.bundles.insert(sku.into(), bundle);
        self
    }

    /// Selects the bundle for `sku`, falling back to `default`.
    ///
    /// Fails with [`PricingError::UnknownConfiguration`] only when the
    /// default entry is missing as well.
    pub fn bundle_for(&self, sku: &str) -> Result<&RuleBundle> {
        self.bundles
            .get(sku)
            .or_else(|| self.bundles.get(DEFAULT_SKU))
            .ok_or_else(|| PricingError::UnknownConfiguration {
                sku: sku.to_string(),
            })
    }

    /// Returns the bundle stored under exactly `sku`, without fallback.
    pub fn get(&self, sku: &str) -> Option<&RuleBundle> {
        self.bundles.get(sku)
    }

    pub fn has_default(&self) -> bool {
        self.bundles.contains_key(DEFAULT_SKU)
    }

    /// Iterates `(sku, bundle)` pairs in SKU order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleBundle)> {
        self.bundles.iter().map(|(sku, bundle)| (sku.as_str(), bundle))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// Root of a stored pricing document: `{ "pricingRules": { ... } }`.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDocument {
    pub pricing_rules: RuleSet,
}

#[cfg(feature = "serde")]
const PRICING_RULES_KEY: &str = "pricingRules";

#[cfg(feature = "serde")]
impl RuleSet {
    /// Parses a rule set from JSON.
    ///
    /// Accepts either the bare SKU map or a [`PricingDocument`] wrapping
    /// it under `pricingRules`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(document_error)?;
        let rules = match value {
            serde_json::Value::Object(mut map) => match map.remove(PRICING_RULES_KEY) {
                Some(inner) => inner,
                None => serde_json::Value::Object(map),
            },
            other => other,
        };
        serde_json::from_value(rules).map_err(document_error)
    }

    /// Serializes the rule set as a `pricingRules` document.
    pub fn to_json(&self) -> Result<String> {
        let document = PricingDocument {
            pricing_rules: self.clone(),
        };
        serde_json::to_string_pretty(&document).map_err(document_error)
    }
}

#[cfg(feature = "serde")]
fn document_error(err: serde_json::Error) -> PricingError {
    PricingError::Document(err.to_string())
}
