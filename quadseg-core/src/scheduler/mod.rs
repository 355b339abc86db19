//! Display scheduler
//!
//! Cooperative refresh/count loop driven by non-blocking interval timers.

pub mod executor;
pub mod timer;

pub use executor::{PollOutcome, Scheduler};
pub use timer::IntervalTimer;
