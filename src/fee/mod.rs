//! Fee Resolver.
//!
//! Looks up a flat handling fee from a quantity-threshold table.

mod resolver;

pub use resolver::{resolve_handling_fee, select_fee_row};
