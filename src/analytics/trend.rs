//! Recent-versus-historical trend detection

use serde::Serialize;
use tracing::debug;

use super::metric::{mean, Metric};
use crate::error::{HoopsError, Result};
use crate::scoring::TIE_TOLERANCE;
use crate::stats::GameStatLine;

/// Percent changes smaller than this (in either direction) read as stable.
pub const DEFAULT_STABLE_BAND_PCT: f64 = 5.0;

/// The most recent `recent` games against the `historical` games before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow {
    recent: usize,
    historical: usize,
}

impl TrendWindow {
    pub fn new(recent: usize, historical: usize) -> Result<Self> {
        if recent == 0 || historical == 0 {
            return Err(HoopsError::invalid_input(
                "trend windows must each cover at least one game",
            ));
        }
        Ok(Self { recent, historical })
    }

    pub fn recent(&self) -> usize {
        self.recent
    }

    pub fn historical(&self) -> usize {
        self.historical
    }

    /// Games to fetch to fill both windows.
    pub fn total(&self) -> usize {
        self.recent.saturating_add(self.historical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub metric: String,
    pub recent_games: usize,
    pub historical_games: usize,
    pub recent_avg: f64,
    pub historical_avg: f64,
    /// `None` when the historical average is zero.
    pub percent_change: Option<f64>,
    pub direction: TrendDirection,
}

/// Compare recent form to the games before it, per metric.
///
/// Lines may arrive in any order; they are split by date. The recent window
/// takes up to `window.recent()` games and the historical window up to
/// `window.historical()` of the games before those. Each window needs at
/// least one game.
pub fn trend(
    lines: &[GameStatLine],
    window: TrendWindow,
    metrics: &[Metric<'_>],
    stable_band_pct: f64,
) -> Result<Vec<Trend>> {
    if !stable_band_pct.is_finite() || stable_band_pct < 0.0 {
        return Err(HoopsError::invalid_input(format!(
            "stable band must be a non-negative percentage (got {})",
            stable_band_pct
        )));
    }

    let mut ordered: Vec<&GameStatLine> = lines.iter().collect();
    ordered.sort_by_key(|l| std::cmp::Reverse(l.date()));
    ordered.truncate(window.total());

    let recent_count = ordered.len().min(window.recent());
    let historical_count = ordered.len() - recent_count;
    if historical_count == 0 {
        return Err(HoopsError::insufficient(
            "trend",
            window.recent().saturating_add(1),
            ordered.len(),
        ));
    }
    debug!(recent_count, historical_count, "trend windows");

    let (recent, historical) = ordered.split_at(recent_count);

    metrics
        .iter()
        .map(|metric| {
            let recent_avg = mean(&metric.values(recent.iter().copied())?).unwrap_or_default();
            let historical_avg =
                mean(&metric.values(historical.iter().copied())?).unwrap_or_default();
            let change = percent_change(recent_avg, historical_avg);
            let direction = classify(
                recent_avg - historical_avg,
                change,
                stable_band_pct,
                metric.lower_is_better(),
            );
            Ok(Trend {
                metric: metric.label(),
                recent_games: recent_count,
                historical_games: historical_count,
                recent_avg,
                historical_avg,
                percent_change: change,
                direction,
            })
        })
        .collect()
}

/// `(recent - historical) / historical * 100`, undefined for a zero base.
pub fn percent_change(recent_avg: f64, historical_avg: f64) -> Option<f64> {
    if historical_avg.abs() < TIE_TOLERANCE {
        return None;
    }
    Some((recent_avg - historical_avg) / historical_avg * 100.0)
}

fn classify(
    diff: f64,
    percent_change: Option<f64>,
    stable_band_pct: f64,
    lower_is_better: bool,
) -> TrendDirection {
    let stable = match percent_change {
        Some(pct) => pct.abs() < stable_band_pct,
        None => diff.abs() < TIE_TOLERANCE,
    };
    if stable {
        TrendDirection::Stable
    } else if (diff > 0.0) != lower_is_better {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}
