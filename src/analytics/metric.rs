//! Per-game values that analytics run over.

use crate::cli::types::StatKind;
use crate::error::Result;
use crate::scoring::{score_points, PointsConfig};
use crate::stats::GameStatLine;

/// A raw stat or the fantasy points a game was worth.
#[derive(Debug, Clone, Copy)]
pub enum Metric<'a> {
    Stat(StatKind),
    FantasyPoints(&'a PointsConfig),
}

impl Metric<'_> {
    pub fn label(&self) -> String {
        match self {
            Metric::Stat(stat) => stat.to_string(),
            Metric::FantasyPoints(_) => "FPTS".to_string(),
        }
    }

    pub fn lower_is_better(&self) -> bool {
        match self {
            Metric::Stat(stat) => stat.lower_is_better(),
            Metric::FantasyPoints(_) => false,
        }
    }

    /// Value for one game. An unrecorded stat is an error, never zero.
    pub fn value(&self, line: &GameStatLine) -> Result<f64> {
        match self {
            Metric::Stat(stat) => line.require(*stat),
            Metric::FantasyPoints(config) => score_points(line, config),
        }
    }

    pub fn values<'l>(
        &self,
        lines: impl IntoIterator<Item = &'l GameStatLine>,
    ) -> Result<Vec<f64>> {
        lines.into_iter().map(|line| self.value(line)).collect()
    }
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation: squared deviations divided by N.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}
