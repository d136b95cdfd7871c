// src/search/mod.rs

//! Search for the schedule that maximises expected hours saved.
//!
//! - [`objective`] scores one schedule.
//! - [`sampler`] draws bounded, relabeled samples of linear extensions.
//! - [`driver`] picks exhaustive enumeration or sampling and tracks the best.
//! - [`reporter`] is the progress sink handed to the driver.

pub mod driver;
pub mod objective;
pub mod reporter;
pub mod sampler;

pub use driver::{Search, SearchOutcome, SearchSettings, SearchState};
pub use objective::{Objective, expected_hours_saved};
pub use reporter::{Reporter, TracingReporter};
pub use sampler::Sampler;
