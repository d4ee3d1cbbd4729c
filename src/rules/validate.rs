//! Rule-set validation.
//!
//! Validation never changes how a rule set is evaluated. It reports
//! shapes the resolvers assume away (unsorted tiers, out-of-range
//! discounts) and ambiguities they resolve silently (conflicting day
//! anchors, quantities below the first tier).

use super::types::{RuleBundle, RuleSet};
use std::fmt;

/// A single problem found in one bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleIssueKind {
    /// The rule set has no `default` bundle.
    MissingDefault,

    /// Tier `index` does not start strictly after the previous tier.
    TiersNotAscending { index: usize },

    /// Tier `index` starts at 0.
    TierFromBelowOne { index: usize },

    /// Tier `index` has a discount outside `[0, 1)`.
    TierDiscountOutOfRange { index: usize, discount: f64 },

    /// The first tier starts above 1, so smaller quantities contribute
    /// no effective units at all.
    UncoveredLowQuantity { first_from: u32 },

    /// Day anchor `index` has day 0.
    DayBelowOne { index: usize },

    /// Day anchor `index` has a discount outside `[0, 1)`.
    DayDiscountOutOfRange { index: usize, discount: f64 },

    /// Two anchors share `day` but disagree on the discount.
    ConflictingDayAnchors { day: u32, first: f64, second: f64 },

    /// Fee row `index` is negative.
    NegativeFee { index: usize, fee: f64 },
}

impl fmt::Display for RuleIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDefault => write!(f, "no default bundle"),
            Self::TiersNotAscending { index } => {
                write!(f, "quantity tier {index} is not above the previous tier")
            }
            Self::TierFromBelowOne { index } => write!(f, "quantity tier {index} starts at 0"),
            Self::TierDiscountOutOfRange { index, discount } => {
                write!(f, "quantity tier {index} discount {discount} outside [0, 1)")
            }
            Self::UncoveredLowQuantity { first_from } => write!(
                f,
                "first tier starts at {first_from}; quantities below it price at zero"
            ),
            Self::DayBelowOne { index } => write!(f, "day anchor {index} has day 0"),
            Self::DayDiscountOutOfRange { index, discount } => {
                write!(f, "day anchor {index} discount {discount} outside [0, 1)")
            }
            Self::ConflictingDayAnchors { day, first, second } => write!(
                f,
                "day {day} has conflicting discounts {first} and {second}"
            ),
            Self::NegativeFee { index, fee } => write!(f, "handling fee {index} is negative ({fee})"),
        }
    }
}

/// A validation issue tagged with the SKU it was found under.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleIssue {
    pub sku: String,
    pub kind: RuleIssueKind,
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sku, self.kind)
    }
}

fn discount_in_range(discount: f64) -> bool {
    (0.0..1.0).contains(&discount)
}

impl RuleBundle {
    /// Lists the issues in this bundle, in table order.
    pub fn check(&self) -> Vec<RuleIssueKind> {
        let mut issues = Vec::new();

        if let Some(first) = self.quantity_tiers.first() {
            if first.from > 1 {
                issues.push(RuleIssueKind::UncoveredLowQuantity {
                    first_from: first.from,
                });
            }
        }
        for (index, tier) in self.quantity_tiers.iter().enumerate() {
            if tier.from < 1 {
                issues.push(RuleIssueKind::TierFromBelowOne { index });
            }
            if index > 0 && tier.from <= self.quantity_tiers[index - 1].from {
                issues.push(RuleIssueKind::TiersNotAscending { index });
            }
            if !discount_in_range(tier.discount) {
                issues.push(RuleIssueKind::TierDiscountOutOfRange {
                    index,
                    discount: tier.discount,
                });
            }
        }

        for (index, anchor) in self.day_discounts.iter().enumerate() {
            if anchor.day < 1 {
                issues.push(RuleIssueKind::DayBelowOne { index });
            }
            if !discount_in_range(anchor.discount) {
                issues.push(RuleIssueKind::DayDiscountOutOfRange {
                    index,
                    discount: anchor.discount,
                });
            }
            // Report each conflicting pair once, against the first earlier match.
            if let Some(earlier) = self.day_discounts[..index]
                .iter()
                .find(|other| other.day == anchor.day && other.discount != anchor.discount)
            {
                issues.push(RuleIssueKind::ConflictingDayAnchors {
                    day: anchor.day,
                    first: earlier.discount,
                    second: anchor.discount,
                });
            }
        }

        for (index, row) in self.handling_fees.iter().enumerate() {
            if row.fee < 0.0 {
                issues.push(RuleIssueKind::NegativeFee {
                    index,
                    fee: row.fee,
                });
            }
        }

        issues
    }
}

impl RuleSet {
    /// Validates every bundle and logs each issue as a warning.
    ///
    /// Returns the issues so callers can reject the rule set; evaluation
    /// itself never consults this.
    pub fn validate(&self) -> Vec<RuleIssue> {
        let mut issues = Vec::new();

        if !self.has_default() {
            issues.push(RuleIssue {
                sku: super::DEFAULT_SKU.to_string(),
                kind: RuleIssueKind::MissingDefault,
            });
        }
        for (sku, bundle) in self.iter() {
            issues.extend(bundle.check().into_iter().map(|kind| RuleIssue {
                sku: sku.to_string(),
                kind,
            }));
        }

        for issue in &issues {
            tracing::warn!(sku = %issue.sku, issue = %issue.kind, "rule-set validation warning");
        }

        issues
    }
}
