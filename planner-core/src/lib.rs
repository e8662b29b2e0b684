//! Domain model shared by the planner service and client.
//!
//! - [`Task`] and [`TaskStore`]: the in-memory, insertion-ordered task list
//! - [`CalendarState`]: selected date and viewed month, kept independent
//! - [`Analysis`] and [`heuristic_analysis`]: the summary/suggestions payload
//!   and the deterministic rule-based way of producing it

mod analysis;
mod calendar;
mod store;
mod task;

pub use analysis::*;
pub use calendar::*;
pub use store::*;
pub use task::*;
