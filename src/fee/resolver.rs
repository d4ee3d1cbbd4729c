//! Quantity-threshold fee lookup.

use crate::rules::FeeRow;

/// Selects the row with the greatest `from <= quantity`.
///
/// Ties on `from` go to the row listed last. Returns `None` when the
/// quantity is below every threshold.
pub fn select_fee_row(quantity: u32, fees: &[FeeRow]) -> Option<&FeeRow> {
    fees.iter()
        .filter(|row| row.from <= quantity)
        .fold(None, |best: Option<&FeeRow>, row| match best {
            Some(best) if best.from > row.from => Some(best),
            _ => Some(row),
        })
}

/// Resolves the handling fee for `quantity`.
///
/// When `enabled` is false the table is not consulted and the fee is 0.
///
/// # Examples
///
/// ```
/// use u_rental::fee::resolve_handling_fee;
/// use u_rental::rules::FeeRow;
///
/// let fees = [FeeRow::new(1, 5.0), FeeRow::new(10, 2.0)];
/// assert_eq!(resolve_handling_fee(12, &fees, true), 2.0);
/// assert_eq!(resolve_handling_fee(5, &fees, true), 5.0);
/// assert_eq!(resolve_handling_fee(12, &fees, false), 0.0);
/// ```
pub fn resolve_handling_fee(quantity: u32, fees: &[FeeRow], enabled: bool) -> f64 {
    if !enabled {
        return 0.0;
    }
    select_fee_row(quantity, fees).map_or(0.0, |row| row.fee)
}
