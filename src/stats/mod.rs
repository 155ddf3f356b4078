//! Stat store for recorded game lines
//!
//! This module holds raw per-game stat lines and the aggregation built on them:
//! - `models`: The validated stat line and its builder
//! - `aggregate`: Season totals, averages and combined shooting percentages
//! - `store`: The in-memory store and its thread-shared wrapper

pub mod aggregate;
pub mod models;
pub mod store;


pub use aggregate::{aggregate_lines, SeasonAggregate, StatTotals};
pub use models::{GameStatLine, GameStatLineBuilder, GameStatLineRecord};
pub use store::{RecordOutcome, SharedStatStore, StatStore};
