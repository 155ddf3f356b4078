//! Next-game projection
//!
//! [`RecentAverageProjector`] is a placeholder: it projects each stat as its
//! recent average with a one standard deviation band. A model-based projector
//! can implement [`Projector`] and slot in without callers changing.

use serde::Serialize;

use super::metric::{mean, population_std_dev};
use crate::cli::types::{PlayerId, ShotType, StatKind, TeamCode};
use crate::error::{HoopsError, Result};
use crate::scoring::PointsConfig;
use crate::stats::GameStatLine;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedStat {
    pub stat: StatKind,
    pub mean: f64,
    /// `None` with fewer than two games to measure spread from.
    pub std_dev: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub player_id: PlayerId,
    pub opponent: Option<TeamCode>,
    pub games_used: usize,
    pub stats: Vec<ProjectedStat>,
}

impl Projection {
    pub fn get(&self, stat: StatKind) -> Option<&ProjectedStat> {
        self.stats.iter().find(|s| s.stat == stat)
    }

    /// Fantasy points implied by the projected means. Per-game bonuses
    /// (double-double, triple-double) are not projected.
    pub fn fantasy_points(&self, config: &PointsConfig) -> Result<f64> {
        config.validate()?;
        let projected = |stat: StatKind| {
            self.get(stat).map(|s| s.mean).ok_or_else(|| {
                HoopsError::invalid_input(format!("projection does not include {}", stat))
            })
        };

        let mut total = 0.0;
        for stat in config.scored() {
            total += config.weight(stat).unwrap_or_default() * projected(stat)?;
        }
        if config.three_pointer_bonus() != 0.0 {
            total += projected(StatKind::ThreePointersMade)? * config.three_pointer_bonus();
        }
        Ok(total)
    }
}

/// Produces a projected stat line from a player's recent games.
pub trait Projector {
    fn project(
        &self,
        player_id: &PlayerId,
        opponent: Option<&TeamCode>,
        recent: &[GameStatLine],
        stats: &[StatKind],
    ) -> Result<Projection>;
}

/// Recent average, plus or minus one population standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecentAverageProjector;

impl Projector for RecentAverageProjector {
    fn project(
        &self,
        player_id: &PlayerId,
        opponent: Option<&TeamCode>,
        recent: &[GameStatLine],
        stats: &[StatKind],
    ) -> Result<Projection> {
        if recent.is_empty() {
            return Err(HoopsError::insufficient("projection", 1, 0));
        }

        let stats = stats
            .iter()
            .map(|&stat| {
                let values = recent
                    .iter()
                    .map(|line| line.require(stat))
                    .collect::<Result<Vec<f64>>>()?;
                let mean = mean(&values).unwrap_or_default();
                let std_dev = (values.len() >= 2)
                    .then(|| population_std_dev(&values))
                    .flatten();
                Ok(ProjectedStat {
                    stat,
                    mean,
                    std_dev,
                    low: std_dev.map(|sd| mean - sd),
                    high: std_dev.map(|sd| mean + sd),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Projection {
            player_id: player_id.clone(),
            opponent: opponent.cloned(),
            games_used: recent.len(),
            stats,
        })
    }
}

/// Fixed-order numeric features for a stat line, for feeding a model:
/// minutes, PTS, REB, AST, STL, BLK, TO, FGM, FGA, 3PM, 3PA, FTM, FTA.
pub fn feature_vector(line: &GameStatLine) -> [f64; 13] {
    let (fgm, fga) = line.shooting(ShotType::FieldGoal);
    let (tpm, tpa) = line.shooting(ShotType::ThreePointer);
    let (ftm, fta) = line.shooting(ShotType::FreeThrow);
    [
        line.minutes(),
        line.points() as f64,
        line.rebounds() as f64,
        line.assists() as f64,
        line.steals() as f64,
        line.blocks() as f64,
        line.turnovers() as f64,
        fgm as f64,
        fga as f64,
        tpm as f64,
        tpa as f64,
        ftm as f64,
        fta as f64,
    ]
}
