use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::cli::types::{Category, PlayerId, ShotType};
use crate::error::Result;
use crate::scoring::config::{CategoryConfig, FantasyFormatConfig, PointsConfig};
use crate::stats::{aggregate_lines, GameStatLine, SeasonAggregate};

/// Values closer than this are treated as equal.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Fantasy points for one game.
///
/// `sum(weight * value)` over the scored stats, plus the per-three bonus, plus
/// the double-double and triple-double bonuses when configured. A
/// triple-double also earns the double-double bonus.
pub fn score_points(line: &GameStatLine, config: &PointsConfig) -> Result<f64> {
    config.validate()?;

    let mut total = 0.0;
    for stat in config.scored() {
        // validate() guarantees a weight for every scored stat
        let weight = config.weight(stat).unwrap_or_default();
        total += weight * line.require(stat)?;
    }

    let (threes_made, _) = line.shooting(ShotType::ThreePointer);
    total += threes_made as f64 * config.three_pointer_bonus();

    let double_digits = line.double_digit_count();
    if double_digits >= 2 {
        total += config.double_double_bonus().unwrap_or(0.0);
    }
    if double_digits >= 3 {
        total += config.triple_double_bonus().unwrap_or(0.0);
    }

    Ok(total)
}

/// Per-game fantasy points over a run of games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsSeries {
    pub scores: Vec<f64>,
    pub total: f64,
    /// `None` for an empty series.
    pub average: Option<f64>,
}

impl PointsSeries {
    pub fn games(&self) -> usize {
        self.scores.len()
    }
}

/// Score each line in order. An empty input has total 0 and no average.
pub fn score_points_series(lines: &[GameStatLine], config: &PointsConfig) -> Result<PointsSeries> {
    let scores = lines
        .iter()
        .map(|line| score_points(line, config))
        .collect::<Result<Vec<f64>>>()?;
    let total: f64 = scores.iter().sum();
    let average = (!scores.is_empty()).then(|| total / scores.len() as f64);
    Ok(PointsSeries {
        scores,
        total,
        average,
    })
}

/// Anything that can report a value per fantasy category.
pub trait CategorySource {
    /// `None` when the value is undefined (a percentage with no attempts).
    fn category_value(&self, category: Category) -> Option<f64>;
}

impl CategorySource for GameStatLine {
    fn category_value(&self, category: Category) -> Option<f64> {
        match (category.counting_stat(), category.shot_type()) {
            (Some(stat), _) => self.stat(stat),
            (None, Some(shot)) => self.percentage(shot),
            (None, None) => None,
        }
    }
}

impl CategorySource for SeasonAggregate {
    /// Counting categories are season totals; percentages are combined
    /// `sum(made) / sum(attempted)`.
    fn category_value(&self, category: Category) -> Option<f64> {
        match (category.counting_stat(), category.shot_type()) {
            (Some(stat), _) => self.total(stat),
            (None, Some(shot)) => self.percentage(shot),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub category: Category,
    pub value: Option<f64>,
    pub negative: bool,
}

/// Values for the selected categories, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLine {
    pub values: Vec<CategoryValue>,
}

impl CategoryLine {
    pub fn get(&self, category: Category) -> Option<&CategoryValue> {
        self.values.iter().find(|v| v.category == category)
    }

    /// Value for a category; `None` if unselected or undefined.
    pub fn value(&self, category: Category) -> Option<f64> {
        self.get(category).and_then(|v| v.value)
    }
}

/// Category values for a single line or an aggregate. Unselected categories
/// are left out.
pub fn score_category<S: CategorySource>(source: &S, config: &CategoryConfig) -> CategoryLine {
    let values = config
        .selected()
        .map(|setting| CategoryValue {
            category: setting.category,
            value: source.category_value(setting.category),
            negative: setting.negative,
        })
        .collect();
    CategoryLine { values }
}

/// Cumulative rotisserie totals for one player's games.
pub fn rotisserie_totals(
    player_id: &PlayerId,
    lines: &[GameStatLine],
    config: &CategoryConfig,
) -> CategoryLine {
    score_category(&aggregate_lines(player_id, None, lines), config)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotoEntry {
    pub player_id: PlayerId,
    pub games_played: usize,
    pub totals: CategoryLine,
}

/// Rotisserie totals for a whole league, computed in parallel. Output order
/// follows input order; ranking is left to the caller.
pub fn league_rotisserie_totals(
    players: &[(PlayerId, Vec<GameStatLine>)],
    config: &CategoryConfig,
) -> Vec<RotoEntry> {
    debug!(players = players.len(), "computing rotisserie totals");
    players
        .par_iter()
        .map(|(player_id, lines)| {
            let aggregate = aggregate_lines(player_id, None, lines);
            RotoEntry {
                player_id: player_id.clone(),
                games_played: aggregate.games_played,
                totals: score_category(&aggregate, config),
            }
        })
        .collect()
}

/// Which side of a two-way comparison came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    First,
    Second,
    Tie,
}

/// Pick the better of two values within [`TIE_TOLERANCE`].
pub fn pick_winner(first: f64, second: f64, lower_is_better: bool) -> Winner {
    let diff = first - second;
    if diff.abs() < TIE_TOLERANCE {
        Winner::Tie
    } else if (diff > 0.0) != lower_is_better {
        Winner::First
    } else {
        Winner::Second
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub winner: Winner,
}

/// Head-to-head category tally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupTally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
    pub outcomes: Vec<CategoryOutcome>,
}

/// Compare two category lines produced under the same config.
///
/// Negative categories go to the lower value. A category that is undefined
/// on either side is a tie.
pub fn category_matchup(first: &CategoryLine, second: &CategoryLine) -> MatchupTally {
    let mut tally = MatchupTally {
        first_wins: 0,
        second_wins: 0,
        ties: 0,
        outcomes: Vec::with_capacity(first.values.len()),
    };

    for value in &first.values {
        let other = second.value(value.category);
        let winner = match (value.value, other) {
            (Some(a), Some(b)) => pick_winner(a, b, value.negative),
            _ => Winner::Tie,
        };
        match winner {
            Winner::First => tally.first_wins += 1,
            Winner::Second => tally.second_wins += 1,
            Winner::Tie => tally.ties += 1,
        }
        tally.outcomes.push(CategoryOutcome {
            category: value.category,
            first: value.value,
            second: other,
            winner,
        });
    }
    tally
}

/// Result of scoring a player's games under any league format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum FormatScore {
    Points(PointsSeries),
    Category(CategoryLine),
    Rotisserie(CategoryLine),
}

/// Score a run of games for one player under the configured format.
pub fn score_lines(
    player_id: &PlayerId,
    lines: &[GameStatLine],
    config: &FantasyFormatConfig,
) -> Result<FormatScore> {
    match config {
        FantasyFormatConfig::Points(points) => {
            Ok(FormatScore::Points(score_points_series(lines, points)?))
        }
        FantasyFormatConfig::Category(categories) => Ok(FormatScore::Category(score_category(
            &aggregate_lines(player_id, None, lines),
            categories,
        ))),
        FantasyFormatConfig::Rotisserie(categories) => Ok(FormatScore::Rotisserie(
            rotisserie_totals(player_id, lines, categories),
        )),
    }
}
