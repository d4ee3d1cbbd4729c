//! Day-Schedule Resolver.
//!
//! Day anchors define a step function over the day index: an anchor's
//! discount activates on its day and holds for every later day until
//! another anchor takes over. Days before the first anchor are not
//! discounted.
//!
//! [`DaySchedule`] sorts the anchors once and then walks days and anchors
//! together, so pricing `days` days costs `O(days + anchors)`.

mod resolver;

pub use resolver::{compute_discounted_price, DaySchedule};
