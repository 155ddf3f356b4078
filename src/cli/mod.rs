//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, StatKind, TeamCode};

/// Arguments shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// JSON file holding an array of stat lines.
    #[clap(long)]
    pub stats: PathBuf,

    /// Scoring settings file (or set `HOOPS_FANTASY_SETTINGS` env var).
    #[clap(long)]
    pub settings: Option<PathBuf>,

    /// Let later lines in the stats file replace earlier ones for the same player and date.
    #[clap(long)]
    pub overwrite: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Log debug detail to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Season totals, averages and shooting percentages for one player.
    Season {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// First day of the season window (YYYY-MM-DD).
        #[clap(long)]
        from: NaiveDate,

        /// Last day of the season window (YYYY-MM-DD).
        #[clap(long)]
        to: NaiveDate,

        /// Name shown for the window.
        #[clap(long, default_value = "season")]
        label: String,
    },

    /// A player's most recent games, newest first.
    Recent {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// Number of games.
        #[clap(long, short = 'n', default_value_t = 5)]
        games: usize,
    },

    /// Score a player's games under the configured league format.
    Score {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// Only score the most recent N games.
        #[clap(long)]
        last: Option<usize>,
    },

    /// Rotisserie category totals for every player (or the ones named).
    Roto {
        #[clap(flatten)]
        common: CommonArgs,

        /// Restrict to these players (repeatable): `-p p1 -p p2`.
        #[clap(long = "player", short = 'p')]
        players: Vec<PlayerId>,
    },

    /// Recent form against the games before it.
    Trend {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// Games in the recent window.
        #[clap(long, default_value_t = 5)]
        recent: usize,

        /// Games in the historical window.
        #[clap(long, default_value_t = 10)]
        historical: usize,

        /// Stats to track (repeatable): `-s PTS -s REB`.
        #[clap(long = "stat", short = 's')]
        stats: Vec<StatKind>,

        /// Also track fantasy points (points format only).
        #[clap(long)]
        fantasy: bool,

        /// Percent changes inside this band count as stable.
        #[clap(long, default_value_t = crate::analytics::DEFAULT_STABLE_BAND_PCT)]
        band: f64,
    },

    /// Mean, spread and coefficient of variation for one stat.
    Consistency {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// Stat to measure; fantasy points when omitted and the format is points.
        #[clap(long, short)]
        stat: Option<StatKind>,

        /// Number of recent games.
        #[clap(long, short = 'n', default_value_t = 10)]
        games: usize,
    },

    /// Two players side by side over their recent games.
    Compare {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        #[clap(long, short)]
        against: PlayerId,

        /// Number of recent games per player.
        #[clap(long, short = 'n', default_value_t = 10)]
        games: usize,
    },

    /// Naive next-game projection from recent averages.
    Project {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        player: PlayerId,

        /// Number of recent games to average.
        #[clap(long, short = 'n', default_value_t = 10)]
        games: usize,

        /// Opponent for the projected game.
        #[clap(long)]
        opponent: Option<TeamCode>,
    },
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Season { common, .. }
            | Commands::Recent { common, .. }
            | Commands::Score { common, .. }
            | Commands::Roto { common, .. }
            | Commands::Trend { common, .. }
            | Commands::Consistency { common, .. }
            | Commands::Compare { common, .. }
            | Commands::Project { common, .. } => common,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "hoops-fantasy",
    about = "Fantasy basketball stat tracking, scoring and analytics"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
