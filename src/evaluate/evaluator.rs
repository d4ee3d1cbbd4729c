//! Top-level rental price evaluation.

use super::types::{RentalRequest, RentalResult};
use crate::error::Result;
use crate::fee::resolve_handling_fee;
use crate::rules::{RuleBundle, RuleSet};
use crate::schedule::compute_discounted_price;
use crate::tier::resolve_effective_quantity;

/// Evaluates rental prices against a rule set.
///
/// Evaluation is a pure function of its arguments: the same rule set and
/// request always produce the same result, and calls can run concurrently
/// on a shared `&RuleSet`.
pub struct PricingEvaluator;

impl PricingEvaluator {
    /// Prices `request` with the bundle for its SKU (or `default`).
    ///
    /// Fails when the request violates its preconditions or when the rule
    /// set has neither the SKU nor a `default` entry.
    pub fn evaluate(rule_set: &RuleSet, request: &RentalRequest) -> Result<RentalResult> {
        request.validate()?;
        let bundle = rule_set.bundle_for(&request.sku)?;
        Ok(price(bundle, request))
    }

    /// Prices `request` with an already selected bundle.
    pub fn evaluate_with_bundle(bundle: &RuleBundle, request: &RentalRequest) -> Result<RentalResult> {
        request.validate()?;
        Ok(price(bundle, request))
    }
}

/// Prices a rental. See [`PricingEvaluator::evaluate`].
///
/// # Examples
///
/// ```
/// use u_rental::evaluate;
/// use u_rental::rules::{RuleBundle, RuleSet};
///
/// let rules = RuleSet::new(RuleBundle::new().with_tier(1, 0.0).with_tier(11, 0.1));
/// let result = evaluate(&rules, "LIFT-01", 15, 1, 10.0).unwrap();
///
/// assert!((result.effective_qty - 14.5).abs() < 1e-10);
/// assert!((result.discounted_price - 145.0).abs() < 1e-10);
/// assert_eq!(result.discounted_daily_rate, 9.67);
/// ```
pub fn evaluate(
    rule_set: &RuleSet,
    sku: &str,
    quantity: u32,
    days: u32,
    base_rate: f64,
) -> Result<RentalResult> {
    PricingEvaluator::evaluate(rule_set, &RentalRequest::new(sku, quantity, days, base_rate))
}

/// Assumes `request` has been validated.
fn price(bundle: &RuleBundle, request: &RentalRequest) -> RentalResult {
    let quantity = f64::from(request.quantity);
    let days = f64::from(request.days);

    let effective_qty = resolve_effective_quantity(request.quantity, &bundle.quantity_tiers);
    let handling_fee = resolve_handling_fee(
        request.quantity,
        &bundle.handling_fees,
        bundle.calculate_handling_fee,
    );
    let discounted_price = compute_discounted_price(
        request.days,
        request.base_rate,
        effective_qty,
        &bundle.day_discounts,
    );

    let total = discounted_price + handling_fee;
    let original_price = request.base_rate * quantity * days;
    let total_discount = original_price - discounted_price;
    let discounted_daily_rate = round_to_cents(discounted_price / days / quantity);
    let discount_pct = if original_price > 0.0 {
        (total_discount / original_price) * 100.0
    } else {
        0.0
    };

    RentalResult {
        sku: request.sku.clone(),
        effective_qty,
        handling_fee,
        discounted_price,
        total,
        original_price,
        total_discount,
        discount_pct,
        discounted_daily_rate,
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn tiered_rules() -> RuleSet {
        RuleSet::new(RuleBundle::new().with_tier(1, 0.0).with_tier(11, 0.1))
    }

    #[test]
    fn test_concrete_scenario() {
        let result = evaluate(&tiered_rules(), "LIFT-01", 15, 1, 10.0).unwrap();

        assert_eq!(result.sku, "LIFT-01");
        assert!((result.effective_qty - 14.5).abs() < 1e-10);
        assert_eq!(result.handling_fee, 0.0);
        assert!((result.discounted_price - 145.0).abs() < 1e-10);
        assert!((result.total - 145.0).abs() < 1e-10);
        assert!((result.original_price - 150.0).abs() < 1e-10);
        assert!((result.total_discount - 5.0).abs() < 1e-10);
        assert!((result.discount_pct - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.discounted_daily_rate, 9.67);
    }

    #[test]
    fn test_fee_added_to_total_but_not_discount() {
        let rules = RuleSet::new(
            RuleBundle::undiscounted()
                .with_fee(1, 5.0)
                .with_fee(10, 2.0)
                .with_handling_fee(true),
        );
        let result = evaluate(&rules, "x", 12, 2, 3.0).unwrap();

        assert_eq!(result.handling_fee, 2.0);
        assert!((result.discounted_price - 72.0).abs() < 1e-10);
        assert!((result.total - 74.0).abs() < 1e-10);
        assert_eq!(result.total_discount, 0.0);
        assert_eq!(result.discount_pct, 0.0);
    }

    #[test]
    fn test_zero_base_rate() {
        let rules = RuleSet::new(
            RuleBundle::undiscounted()
                .with_day_discount(2, 0.5)
                .with_fee(1, 4.0)
                .with_handling_fee(true),
        );
        let result = evaluate(&rules, "x", 8, 5, 0.0).unwrap();

        assert_eq!(result.discounted_price, 0.0);
        assert_eq!(result.original_price, 0.0);
        assert_eq!(result.discount_pct, 0.0);
        assert_eq!(result.discounted_daily_rate, 0.0);
        assert_eq!(result.total, result.handling_fee);
    }

    #[test]
    fn test_day_discounts_applied() {
        let rules = RuleSet::new(
            RuleBundle::undiscounted()
                .with_day_discount(1, 0.0)
                .with_day_discount(5, 0.2),
        );
        let result = evaluate(&rules, "x", 2, 10, 10.0).unwrap();
        let expected = 20.0 * (4.0 + 6.0 * 0.8);

        assert!((result.discounted_price - expected).abs() < 1e-10);
        assert!((result.original_price - 200.0).abs() < 1e-10);
        assert!((result.discount_pct - 12.0).abs() < 1e-10);
        assert_eq!(result.discounted_daily_rate, 8.8);
    }

    #[test]
    fn test_sku_specific_bundle() {
        let rules = tiered_rules().with_sku("PROMO", RuleBundle::new().with_tier(1, 0.5));
        let promo = evaluate(&rules, "PROMO", 4, 1, 10.0).unwrap();
        let fallback = evaluate(&rules, "OTHER", 4, 1, 10.0).unwrap();

        assert!((promo.discounted_price - 20.0).abs() < 1e-10);
        assert!((fallback.discounted_price - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_quantity_below_first_tier() {
        let rules = RuleSet::new(RuleBundle::new().with_tier(5, 0.0));
        let result = evaluate(&rules, "x", 3, 2, 10.0).unwrap();

        assert_eq!(result.effective_qty, 0.0);
        assert_eq!(result.discounted_price, 0.0);
        assert!((result.discount_pct - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_configuration() {
        let rules = RuleSet::default().with_sku("LIFT-01", RuleBundle::undiscounted());
        let err = evaluate(&rules, "TENT-99", 1, 1, 1.0).unwrap_err();
        assert!(matches!(err, PricingError::UnknownConfiguration { .. }));
    }

    #[test]
    fn test_precondition_violations() {
        let rules = tiered_rules();
        assert!(matches!(
            evaluate(&rules, "x", 0, 1, 1.0),
            Err(PricingError::InvalidQuantity(0))
        ));
        assert!(matches!(
            evaluate(&rules, "x", 1, 0, 1.0),
            Err(PricingError::InvalidDays(0))
        ));
        assert!(matches!(
            evaluate(&rules, "x", 1, 1, -1.0),
            Err(PricingError::InvalidBaseRate(_))
        ));
        assert!(matches!(
            evaluate(&rules, "x", 1, 1, f64::NAN),
            Err(PricingError::InvalidBaseRate(_))
        ));
    }

    #[test]
    fn test_evaluate_with_bundle() {
        let bundle = RuleBundle::undiscounted();
        let request = RentalRequest::new("x", 3, 2, 5.0);
        let result = PricingEvaluator::evaluate_with_bundle(&bundle, &request).unwrap();
        assert!((result.discounted_price - 30.0).abs() < 1e-10);
        assert_eq!(result.discounted_daily_rate, 5.0);
    }

    #[test]
    fn test_idempotent() {
        let rules = RuleSet::new(
            RuleBundle::new()
                .with_tier(1, 0.0)
                .with_tier(4, 0.15)
                .with_day_discount(3, 0.1),
        );
        let request = RentalRequest::new("x", 9, 11, 7.25);
        let first = PricingEvaluator::evaluate(&rules, &request).unwrap();
        let second = PricingEvaluator::evaluate(&rules, &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(9.666_666), 9.67);
        assert_eq!(round_to_cents(9.664), 9.66);
        assert_eq!(round_to_cents(0.0), 0.0);
    }
}
