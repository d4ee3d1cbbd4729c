//! Sweep execution.

use super::config::{Metric, SweepAxis, SweepConfig};
use crate::error::{PricingError, Result};
use crate::evaluate::{PricingEvaluator, RentalRequest, RentalResult};
use crate::rules::RuleSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One evaluated point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Value of the swept input.
    pub x: u32,

    /// The configured metric, rounded if requested.
    pub value: f64,

    /// Full result at this point.
    pub result: RentalResult,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub axis: SweepAxis,
    pub metric: Metric,

    /// e.g. `"Discounted Price (Days = 7)"`.
    pub series_label: String,

    /// Points in ascending `x`.
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Swept input values, in order.
    pub fn xs(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Collected metric values, in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Executes pricing sweeps.
pub struct SweepRunner;

impl SweepRunner {
    /// Evaluates every point of the sweep described by `config`.
    ///
    /// Each point is an independent evaluation. Parallel and sequential
    /// runs return identical points in identical order.
    pub fn run(rule_set: &RuleSet, config: &SweepConfig) -> Result<SweepResult> {
        config.validate().map_err(PricingError::InvalidSweep)?;
        let bundle = rule_set.bundle_for(&config.sku)?;

        let xs: Vec<u32> = (1..=config.max).step_by(config.step as usize).collect();

        tracing::debug!(
            sku = %config.sku,
            axis = config.axis.title(),
            points = xs.len(),
            parallel = config.parallel,
            "running pricing sweep"
        );

        let point = |x: u32| -> Result<SweepPoint> {
            let (quantity, days) = config.inputs_at(x);
            let request = RentalRequest::new(config.sku.as_str(), quantity, days, config.base_rate);
            let result = PricingEvaluator::evaluate_with_bundle(bundle, &request)?;
            let raw = config.metric.value(&result);
            let value = if config.round_to_tenth {
                round_to_tenth(raw)
            } else {
                raw
            };
            Ok(SweepPoint { x, value, result })
        };

        let points = collect_points(&xs, config.parallel, point)?;

        Ok(SweepResult {
            axis: config.axis,
            metric: config.metric,
            series_label: config.series_label(),
            points,
        })
    }
}

#[cfg(feature = "parallel")]
fn collect_points<F>(xs: &[u32], parallel: bool, point: F) -> Result<Vec<SweepPoint>>
where
    F: Fn(u32) -> Result<SweepPoint> + Sync + Send,
{
    if parallel {
        xs.par_iter().map(|&x| point(x)).collect()
    } else {
        xs.iter().map(|&x| point(x)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_points<F>(xs: &[u32], _parallel: bool, point: F) -> Result<Vec<SweepPoint>>
where
    F: Fn(u32) -> Result<SweepPoint>,
{
    xs.iter().map(|&x| point(x)).collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
