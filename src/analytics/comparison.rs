//! Head-to-head player comparison

use serde::Serialize;
use std::fmt;

use crate::cli::types::{PlayerId, ShotType, StatKind};
use crate::error::{HoopsError, Result};
use crate::scoring::{pick_winner, Winner};
use crate::stats::{aggregate_lines, GameStatLine, SeasonAggregate};

/// What to compare between two aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Per-game average of a stat.
    Average(StatKind),
    /// Combined shooting percentage.
    Percentage(ShotType),
}

impl Measure {
    pub fn value(&self, aggregate: &SeasonAggregate) -> Option<f64> {
        match self {
            Measure::Average(stat) => aggregate.average(*stat),
            Measure::Percentage(shot) => aggregate.percentage(*shot),
        }
    }

    pub fn lower_is_better(&self) -> bool {
        match self {
            Measure::Average(stat) => stat.lower_is_better(),
            Measure::Percentage(_) => false,
        }
    }

    /// Scoring averages plus field goal and free throw percentage.
    pub fn standard() -> Vec<Measure> {
        vec![
            Measure::Average(StatKind::Points),
            Measure::Average(StatKind::Rebounds),
            Measure::Average(StatKind::Assists),
            Measure::Average(StatKind::Steals),
            Measure::Average(StatKind::Blocks),
            Measure::Average(StatKind::ThreePointersMade),
            Measure::Average(StatKind::Turnovers),
            Measure::Percentage(ShotType::FieldGoal),
            Measure::Percentage(ShotType::FreeThrow),
        ]
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Average(stat) => write!(f, "{}", stat),
            Measure::Percentage(shot) => write!(f, "{}", shot),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub measure: String,
    pub first: Option<f64>,
    pub second: Option<f64>,
    /// `first - second`.
    pub difference: Option<f64>,
    /// Lower-is-better stats go to the smaller value. `None` when either side
    /// is undefined.
    pub winner: Option<Winner>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: PlayerId,
    pub second: PlayerId,
    pub first_games: usize,
    pub second_games: usize,
    pub rows: Vec<StatComparison>,
}

impl Comparison {
    pub fn row(&self, measure: Measure) -> Option<&StatComparison> {
        let label = measure.to_string();
        self.rows.iter().find(|r| r.measure == label)
    }
}

/// Compare two players' aggregates measure by measure.
pub fn compare(
    first: &SeasonAggregate,
    second: &SeasonAggregate,
    measures: &[Measure],
) -> Result<Comparison> {
    for aggregate in [first, second] {
        if !aggregate.has_data() {
            return Err(HoopsError::insufficient(
                format!("comparison of {}", aggregate.player_id),
                1,
                0,
            ));
        }
    }

    let rows = measures
        .iter()
        .map(|measure| {
            let a = measure.value(first);
            let b = measure.value(second);
            let (difference, winner) = match (a, b) {
                (Some(a), Some(b)) => (
                    Some(a - b),
                    Some(pick_winner(a, b, measure.lower_is_better())),
                ),
                _ => (None, None),
            };
            StatComparison {
                measure: measure.to_string(),
                first: a,
                second: b,
                difference,
                winner,
            }
        })
        .collect();

    Ok(Comparison {
        first: first.player_id.clone(),
        second: second.player_id.clone(),
        first_games: first.games_played,
        second_games: second.games_played,
        rows,
    })
}

/// Aggregate two raw series and compare them.
pub fn compare_series(
    first_id: &PlayerId,
    first_lines: &[GameStatLine],
    second_id: &PlayerId,
    second_lines: &[GameStatLine],
    measures: &[Measure],
) -> Result<Comparison> {
    compare(
        &aggregate_lines(first_id, None, first_lines),
        &aggregate_lines(second_id, None, second_lines),
        measures,
    )
}
