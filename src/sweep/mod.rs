//! Pricing sweeps.
//!
//! Evaluates a rental at evenly spaced values of one input (quantity or
//! days) with the other held fixed, and collects one result field into a
//! series. Points are independent evaluations, so with the `parallel`
//! feature they are spread across a rayon pool.
//!
//! Formatting the series (currency, percent signs, axes) is left to the
//! consumer.

mod config;
mod runner;

pub use config::{Metric, SweepAxis, SweepConfig};
pub use runner::{SweepPoint, SweepResult, SweepRunner};
