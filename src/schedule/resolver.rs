//! Step-function day discount resolution.

use crate::rules::DayAnchor;

/// Day anchors sorted by day, ready for step lookups.
///
/// Sorting is stable, so among anchors sharing a day the one listed last
/// in the rule set wins.
///
/// # Examples
///
/// ```
/// use u_rental::rules::DayAnchor;
/// use u_rental::schedule::DaySchedule;
///
/// let schedule = DaySchedule::new(&[DayAnchor::new(5, 0.2), DayAnchor::new(1, 0.0)]);
/// assert_eq!(schedule.discount_for_day(4), 0.0);
/// assert_eq!(schedule.discount_for_day(5), 0.2);
/// assert_eq!(schedule.discount_for_day(90), 0.2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    anchors: Vec<DayAnchor>,
}

impl DaySchedule {
    pub fn new(anchors: &[DayAnchor]) -> Self {
        let mut anchors = anchors.to_vec();
        anchors.sort_by_key(|anchor| anchor.day);
        Self { anchors }
    }

    /// The anchors in ascending day order.
    pub fn anchors(&self) -> &[DayAnchor] {
        &self.anchors
    }

    /// Discount in effect on `day`: that of the anchor with the largest
    /// `anchor.day <= day`, or 0 when no anchor has started yet.
    pub fn discount_for_day(&self, day: u32) -> f64 {
        let started = self.anchors.partition_point(|anchor| anchor.day <= day);
        started
            .checked_sub(1)
            .map_or(0.0, |last| self.anchors[last].discount)
    }

    /// Sums `base_rate * effective_qty * (1 - discount(d))` for days
    /// `1..=days`.
    pub fn discounted_price(&self, days: u32, base_rate: f64, effective_qty: f64) -> f64 {
        let daily_base = base_rate * effective_qty;
        let mut next = 0;
        let mut discount = 0.0;
        let mut total = 0.0;

        for day in 1..=days {
            while next < self.anchors.len() && self.anchors[next].day <= day {
                discount = self.anchors[next].discount;
                next += 1;
            }
            total += daily_base * (1.0 - discount);
        }

        total
    }
}

/// Prices `days` days of `effective_qty` units at `base_rate` under the
/// step schedule defined by `day_discounts`.
pub fn compute_discounted_price(
    days: u32,
    base_rate: f64,
    effective_qty: f64,
    day_discounts: &[DayAnchor],
) -> f64 {
    DaySchedule::new(day_discounts).discounted_price(days, base_rate, effective_qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(rows: &[(u32, f64)]) -> Vec<DayAnchor> {
        rows.iter().map(|&(day, d)| DayAnchor::new(day, d)).collect()
    }

    #[test]
    fn test_no_anchors() {
        let price = compute_discounted_price(7, 10.0, 3.0, &[]);
        assert!((price - 210.0).abs() < 1e-10);
    }

    #[test]
    fn test_step_behavior() {
        let a = anchors(&[(1, 0.0), (5, 0.2)]);
        let price = compute_discounted_price(10, 10.0, 1.0, &a);
        // Days 1-4 at full rate, 5-10 at 80%.
        assert!((price - 10.0 * (4.0 * 1.0 + 6.0 * 0.8)).abs() < 1e-10);
    }

    #[test]
    fn test_unsorted_anchors() {
        let sorted = anchors(&[(1, 0.0), (3, 0.1), (8, 0.3)]);
        let shuffled = anchors(&[(8, 0.3), (1, 0.0), (3, 0.1)]);
        assert_eq!(
            compute_discounted_price(12, 5.0, 2.0, &sorted),
            compute_discounted_price(12, 5.0, 2.0, &shuffled)
        );
    }

    #[test]
    fn test_days_before_first_anchor_are_full_price() {
        let schedule = DaySchedule::new(&anchors(&[(3, 0.5)]));
        assert_eq!(schedule.discount_for_day(1), 0.0);
        assert_eq!(schedule.discount_for_day(2), 0.0);
        assert_eq!(schedule.discount_for_day(3), 0.5);
        // 2 * 1.0 + 2 * 0.5
        assert!((schedule.discounted_price(4, 1.0, 1.0) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_anchor_beyond_rental_is_ignored() {
        let price = compute_discounted_price(3, 2.0, 1.0, &anchors(&[(10, 0.9)]));
        assert!((price - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_day_last_listed_wins() {
        let schedule = DaySchedule::new(&anchors(&[(2, 0.1), (2, 0.4)]));
        assert_eq!(schedule.discount_for_day(2), 0.4);
        // The walking sum agrees with the point lookup.
        let walked = schedule.discounted_price(3, 1.0, 1.0);
        assert!((walked - (1.0 + 0.6 + 0.6)).abs() < 1e-10);
    }

    #[test]
    fn test_walk_matches_lookup() {
        let schedule = DaySchedule::new(&anchors(&[(4, 0.15), (1, 0.05), (9, 0.25), (6, 0.2)]));
        let by_lookup: f64 = (1..=15)
            .map(|d| 3.0 * 2.5 * (1.0 - schedule.discount_for_day(d)))
            .sum();
        assert!((schedule.discounted_price(15, 3.0, 2.5) - by_lookup).abs() < 1e-10);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(compute_discounted_price(30, 0.0, 12.0, &anchors(&[(2, 0.5)])), 0.0);
    }

    #[test]
    fn test_anchors_sorted() {
        let schedule = DaySchedule::new(&anchors(&[(9, 0.2), (1, 0.0)]));
        let days: Vec<u32> = schedule.anchors().iter().map(|a| a.day).collect();
        assert_eq!(days, vec![1, 9]);
    }
}
