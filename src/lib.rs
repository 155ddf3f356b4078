//! Fantasy Basketball Stat Engine
//!
//! A Rust library for recording per-game basketball stat lines, scoring them
//! under fantasy league formats, and deriving analytics from them.
//!
//! ## Features
//!
//! - **Stat Store**: Validated per-game stat lines, one per player and date,
//!   with recent-game and date-range queries and season aggregates
//! - **Scoring Engine**: Points, category and rotisserie formats with immutable,
//!   explicitly constructed configurations
//! - **Analytics**: Trend detection, consistency (coefficient of variation),
//!   head-to-head comparison and a naive recent-average projection
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hoops_fantasy::{
//!     scoring::{score_points, PointsConfig},
//!     stats::{GameStatLine, StatStore},
//!     PlayerId, SeasonWindow, StatKind, TeamCode,
//! };
//!
//! # fn main() -> hoops_fantasy::Result<()> {
//! let date = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
//! let line = GameStatLine::builder(PlayerId::new("curry"), date, TeamCode::new("LAL"))
//!     .points(28)
//!     .rebounds(8)
//!     .assists(7)
//!     .steals(2)
//!     .blocks(1)
//!     .turnovers(3)
//!     .three_pointers(3, 9)
//!     .build()?;
//!
//! let fantasy_points = score_points(&line, &PointsConfig::default())?;
//! assert!((fantasy_points - 55.6).abs() < 1e-9);
//!
//! let mut store = StatStore::new();
//! store.record(line, false)?;
//!
//! let season = SeasonWindow::new(
//!     "2024-25",
//!     NaiveDate::from_ymd_opt(2024, 10, 22).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
//! )?;
//! let aggregate = store.season_aggregate(&PlayerId::new("curry"), &season);
//! assert_eq!(aggregate.average(StatKind::Points), Some(28.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a scoring settings file instead of passing `--settings`:
//! ```bash
//! export HOOPS_FANTASY_SETTINGS=~/leagues/work-league.json
//! ```

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod error;
pub mod scoring;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Category, PlayerId, SeasonWindow, ShotType, StatKind, TeamCode};
pub use error::{HoopsError, Result};

pub const SETTINGS_ENV_VAR: &str = "HOOPS_FANTASY_SETTINGS";
