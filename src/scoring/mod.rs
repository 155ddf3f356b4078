//! Fantasy scoring engine
//!
//! Converts stat lines and aggregates into fantasy value:
//! - `config`: Immutable points / category / rotisserie settings
//! - `settings`: Loading those settings from a JSON file
//! - `compute`: The scoring functions themselves

pub mod compute;
pub mod config;
pub mod settings;

pub use compute::{
    category_matchup, league_rotisserie_totals, pick_winner, rotisserie_totals, score_category,
    score_lines, score_points, score_points_series, CategoryLine, CategoryOutcome,
    CategorySource, CategoryValue, FormatScore, MatchupTally, PointsSeries, RotoEntry, Winner,
    TIE_TOLERANCE,
};
pub use config::{CategoryConfig, CategorySetting, FantasyFormatConfig, PointsConfig};
pub use settings::{load_format_config, parse_format_config, settings_path, settings_path_from};
