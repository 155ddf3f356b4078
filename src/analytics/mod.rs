//! Analytics engine
//!
//! Statistical signals derived from runs of stat lines:
//! - `trend`: Recent form against the games before it
//! - `consistency`: Spread of a per-game series (population SD, CV)
//! - `comparison`: Two players side by side
//! - `projection`: Next-game projection behind the `Projector` trait
//! - `analyzer`: The same operations keyed by player id over a store

pub mod analyzer;
pub mod comparison;
pub mod consistency;
pub mod metric;
pub mod projection;
pub mod trend;


pub use analyzer::PlayerAnalyzer;
pub use comparison::{compare, compare_series, Comparison, Measure, StatComparison};
pub use consistency::{consistency, Consistency};
pub use metric::{population_std_dev, Metric};
pub use projection::{feature_vector, ProjectedStat, Projection, Projector, RecentAverageProjector};
pub use trend::{percent_change, trend, Trend, TrendDirection, TrendWindow, DEFAULT_STABLE_BAND_PCT};
