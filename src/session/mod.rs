//! User session state.
//!
//! A [`PlannerSession`] is an explicit state object: every handler receives it,
//! mutates it through typed operations, and reads derived values back from it.

mod planner;

pub use planner::{MAX_WINDOW_DAYS, PlannerSession};
