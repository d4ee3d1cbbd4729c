//! Tier Resolver.
//!
//! Converts a raw quantity into an effective quantity by splitting it
//! across graduated tiers and weighting each unit by `1 - discount`.
//!
//! Tiers are walked in the order given. Units below the first tier's
//! `from` belong to no tier and contribute nothing.

mod resolver;

pub use resolver::{resolve_effective_quantity, tier_portions, TierPortion};
