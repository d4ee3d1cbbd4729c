//! Graduated quantity discount resolution.

use crate::rules::QuantityTier;

/// The share of a quantity that falls into one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPortion {
    /// First unit covered by the tier.
    pub from: u32,
    /// Last unit covered by the tier, `None` for the open-ended last tier.
    pub to: Option<u32>,
    /// Number of units of the quantity inside `[from, to]`.
    pub units: u32,
    /// `units * (1 - discount)`.
    pub effective: f64,
}

/// Splits `quantity` across `tiers`, one portion per tier in input order.
///
/// Tier `i` covers `[from_i, from_{i+1} - 1]`; the last tier is unbounded.
/// Portions with no units are still reported so the output lines up with
/// the tier table.
pub fn tier_portions(quantity: u32, tiers: &[QuantityTier]) -> Vec<TierPortion> {
    let quantity = i64::from(quantity);

    tiers
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let to = tiers.get(i + 1).map(|next| i64::from(next.from) - 1);
            let upper = to.map_or(quantity, |to| quantity.min(to));
            let units = (upper - i64::from(tier.from) + 1).max(0);
            let effective = if units > 0 {
                units as f64 * (1.0 - tier.discount)
            } else {
                0.0
            };
            TierPortion {
                from: tier.from,
                to: to.map(|to| to.max(0) as u32),
                units: units as u32,
                effective,
            }
        })
        .collect()
}

/// Computes the effective quantity of `quantity` under `tiers`.
///
/// # Examples
///
/// ```
/// use u_rental::rules::QuantityTier;
/// use u_rental::tier::resolve_effective_quantity;
///
/// let tiers = [QuantityTier::new(1, 0.0), QuantityTier::new(11, 0.1)];
/// // 10 units at full weight, 5 at 90%
/// assert!((resolve_effective_quantity(15, &tiers) - 14.5).abs() < 1e-10);
/// ```
pub fn resolve_effective_quantity(quantity: u32, tiers: &[QuantityTier]) -> f64 {
    tier_portions(quantity, tiers)
        .iter()
        .map(|portion| portion.effective)
        .sum()
}
