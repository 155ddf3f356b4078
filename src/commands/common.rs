//! Shared setup and formatting helpers for the command handlers.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::{
    cli::CommonArgs,
    error::{HoopsError, Result},
    scoring::{load_format_config, CategoryConfig, FantasyFormatConfig, PointsConfig},
    stats::{GameStatLine, StatStore},
};

/// Everything a command needs: the loaded store, the league format and how
/// to print.
#[derive(Debug)]
pub struct CommandContext {
    pub store: StatStore,
    pub format: FantasyFormatConfig,
    pub as_json: bool,
}

impl CommandContext {
    pub fn new(store: StatStore, format: FantasyFormatConfig, as_json: bool) -> Self {
        Self {
            store,
            format,
            as_json,
        }
    }

    /// Load the stats file and scoring settings named on the command line.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let lines = read_stat_lines(&args.stats)?;
        let mut store = StatStore::new();
        let recorded = store.record_all(lines, args.overwrite)?;
        info!(
            path = %args.stats.display(),
            recorded,
            players = store.players().len(),
            "loaded stat lines"
        );

        let format = load_format_config(args.settings.as_deref())?;
        info!(format = format.name(), "loaded scoring format");

        Ok(Self::new(store, format, args.json))
    }

    pub fn points_config(&self) -> Result<&PointsConfig> {
        match &self.format {
            FantasyFormatConfig::Points(config) => Ok(config),
            other => Err(HoopsError::invalid_config(format!(
                "fantasy points need a points format, found {}",
                other.name()
            ))),
        }
    }

    pub fn category_config(&self) -> Result<&CategoryConfig> {
        match &self.format {
            FantasyFormatConfig::Category(config) | FantasyFormatConfig::Rotisserie(config) => {
                Ok(config)
            }
            other => Err(HoopsError::invalid_config(format!(
                "category totals need a category or rotisserie format, found {}",
                other.name()
            ))),
        }
    }
}

/// Parse a JSON array of stat lines; every record is validated.
pub fn parse_stat_lines(json: &str) -> Result<Vec<GameStatLine>> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_stat_lines(path: &Path) -> Result<Vec<GameStatLine>> {
    let contents = std::fs::read_to_string(path)?;
    parse_stat_lines(&contents)
}

/// Pretty JSON on its own line.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// A value to `precision` places, or `n/a` when it cannot be computed.
pub fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}

/// A 0-1 ratio as a percentage, or `n/a`.
pub fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "n/a".to_string(),
    }
}
