//! Sweep configuration and plotted metrics.

use crate::evaluate::RentalResult;
use crate::rules::DEFAULT_SKU;

/// The input varied across a sweep. The other one stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SweepAxis {
    /// Vary the quantity; days are fixed.
    Quantity,
    /// Vary the days; quantity is fixed.
    Days,
}

impl SweepAxis {
    /// Axis title for the swept input.
    pub fn title(&self) -> &'static str {
        match self {
            SweepAxis::Quantity => "Quantity",
            SweepAxis::Days => "Days",
        }
    }
}

/// A [`RentalResult`] field collected into a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Metric {
    #[default]
    DiscountedPrice,
    TotalDiscount,
    DiscountPct,
}

impl Metric {
    /// Reads this metric from a result.
    pub fn value(&self, result: &RentalResult) -> f64 {
        match self {
            Metric::DiscountedPrice => result.discounted_price,
            Metric::TotalDiscount => result.total_discount,
            Metric::DiscountPct => result.discount_pct,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::DiscountedPrice => "Discounted Price",
            Metric::TotalDiscount => "Total Discount",
            Metric::DiscountPct => "Percent Discount",
        }
    }

    /// Title for the value axis.
    pub fn axis_title(&self) -> &'static str {
        if self.is_percentage() {
            "Percent"
        } else {
            "Total"
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Metric::DiscountPct)
    }

    /// Parses a result field name (`"totalDiscount"`, `"discountPct"`).
    /// Anything else selects the discounted price.
    pub fn from_field(name: &str) -> Self {
        match name {
            "totalDiscount" => Metric::TotalDiscount,
            "discountPct" => Metric::DiscountPct,
            _ => Metric::DiscountedPrice,
        }
    }
}

/// Configuration for a one-axis pricing sweep.
///
/// The swept input runs `1, 1 + step, 1 + 2*step, ...` up to `max`.
///
/// # Examples
///
/// ```
/// use u_rental::sweep::{Metric, SweepConfig};
///
/// let config = SweepConfig::quantity(50)
///     .with_step(5)
///     .with_fixed(7)
///     .with_sku("LIFT-01")
///     .with_base_rate(12.5)
///     .with_metric(Metric::DiscountPct);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Input being varied.
    pub axis: SweepAxis,

    /// Largest swept value (inclusive upper bound).
    pub max: u32,

    /// Distance between consecutive points.
    pub step: u32,

    /// Value of the input that is not swept (days for a quantity sweep,
    /// quantity for a days sweep).
    pub fixed: u32,

    pub sku: String,

    pub base_rate: f64,

    /// Result field collected at each point.
    pub metric: Metric,

    /// Round collected values to one decimal.
    pub round_to_tenth: bool,

    /// Evaluate points in parallel using rayon. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            axis: SweepAxis::Quantity,
            max: 1,
            step: 1,
            fixed: 1,
            sku: DEFAULT_SKU.to_string(),
            base_rate: 0.0,
            metric: Metric::default(),
            round_to_tenth: true,
            parallel: true,
        }
    }
}

impl SweepConfig {
    /// A quantity sweep from 1 to `max`.
    pub fn quantity(max: u32) -> Self {
        Self {
            axis: SweepAxis::Quantity,
            max,
            ..Self::default()
        }
    }

    /// A days sweep from 1 to `max`.
    pub fn days(max: u32) -> Self {
        Self {
            axis: SweepAxis::Days,
            max,
            ..Self::default()
        }
    }

    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn with_fixed(mut self, fixed: u32) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_rounding(mut self, round_to_tenth: bool) -> Self {
        self.round_to_tenth = round_to_tenth;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns `(quantity, days)` for the point at `x`.
    pub fn inputs_at(&self, x: u32) -> (u32, u32) {
        match self.axis {
            SweepAxis::Quantity => (x, self.fixed),
            SweepAxis::Days => (self.fixed, x),
        }
    }

    /// Label for the collected series, e.g. `"Total Discount (Qty = 4)"`.
    pub fn series_label(&self) -> String {
        let fixed_name = match self.axis {
            SweepAxis::Quantity => "Days",
            SweepAxis::Days => "Qty",
        };
        format!("{} ({} = {})", self.metric.label(), fixed_name, self.fixed)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max < 1 {
            return Err("max must be at least 1".into());
        }
        if self.step < 1 {
            return Err("step must be at least 1".into());
        }
        if self.fixed < 1 {
            return Err(format!(
                "fixed {} must be at least 1",
                match self.axis {
                    SweepAxis::Quantity => "days",
                    SweepAxis::Days => "quantity",
                }
            ));
        }
        if !self.base_rate.is_finite() || self.base_rate < 0.0 {
            return Err(format!(
                "base_rate must be finite and non-negative, got {}",
                self.base_rate
            ));
        }
        Ok(())
    }
}
