//! Season aggregation over stat lines

use super::models::GameStatLine;
use crate::cli::types::{PlayerId, ShotType, StatKind};
use serde::Serialize;

/// Summed stats over a set of games.
///
/// Optional stats (rebound split, plus/minus) only have a total when every
/// game recorded them; one missing game makes the total unknown rather than
/// undercounted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTotals {
    pub minutes: f64,
    pub points: u64,
    pub rebounds: u64,
    pub offensive_rebounds: Option<u64>,
    pub defensive_rebounds: Option<u64>,
    pub assists: u64,
    pub steals: u64,
    pub blocks: u64,
    pub turnovers: u64,
    pub personal_fouls: u64,
    pub plus_minus: Option<i64>,
    pub field_goals_made: u64,
    pub field_goals_attempted: u64,
    pub three_pointers_made: u64,
    pub three_pointers_attempted: u64,
    pub free_throws_made: u64,
    pub free_throws_attempted: u64,
}

impl Default for StatTotals {
    fn default() -> Self {
        Self {
            minutes: 0.0,
            points: 0,
            rebounds: 0,
            offensive_rebounds: Some(0),
            defensive_rebounds: Some(0),
            assists: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            personal_fouls: 0,
            plus_minus: Some(0),
            field_goals_made: 0,
            field_goals_attempted: 0,
            three_pointers_made: 0,
            three_pointers_attempted: 0,
            free_throws_made: 0,
            free_throws_attempted: 0,
        }
    }
}

impl StatTotals {
    pub fn add(&mut self, line: &GameStatLine) {
        self.minutes += line.minutes();
        self.points += u64::from(line.points());
        self.rebounds += u64::from(line.rebounds());
        self.offensive_rebounds = self
            .offensive_rebounds
            .zip(line.offensive_rebounds())
            .map(|(t, v)| t + u64::from(v));
        self.defensive_rebounds = self
            .defensive_rebounds
            .zip(line.defensive_rebounds())
            .map(|(t, v)| t + u64::from(v));
        self.assists += u64::from(line.assists());
        self.steals += u64::from(line.steals());
        self.blocks += u64::from(line.blocks());
        self.turnovers += u64::from(line.turnovers());
        self.personal_fouls += u64::from(line.personal_fouls());
        self.plus_minus = self
            .plus_minus
            .zip(line.plus_minus())
            .map(|(t, v)| t + i64::from(v));

        let (m, a) = line.shooting(ShotType::FieldGoal);
        self.field_goals_made += u64::from(m);
        self.field_goals_attempted += u64::from(a);
        let (m, a) = line.shooting(ShotType::ThreePointer);
        self.three_pointers_made += u64::from(m);
        self.three_pointers_attempted += u64::from(a);
        let (m, a) = line.shooting(ShotType::FreeThrow);
        self.free_throws_made += u64::from(m);
        self.free_throws_attempted += u64::from(a);
    }

    /// Total for one stat, `None` when an optional stat is incomplete.
    pub fn get(&self, kind: StatKind) -> Option<f64> {
        let value = match kind {
            StatKind::Points => self.points as f64,
            StatKind::Rebounds => self.rebounds as f64,
            StatKind::OffensiveRebounds => self.offensive_rebounds? as f64,
            StatKind::DefensiveRebounds => self.defensive_rebounds? as f64,
            StatKind::Assists => self.assists as f64,
            StatKind::Steals => self.steals as f64,
            StatKind::Blocks => self.blocks as f64,
            StatKind::Turnovers => self.turnovers as f64,
            StatKind::PersonalFouls => self.personal_fouls as f64,
            StatKind::PlusMinus => self.plus_minus? as f64,
            StatKind::FieldGoalsMade => self.field_goals_made as f64,
            StatKind::FieldGoalsAttempted => self.field_goals_attempted as f64,
            StatKind::ThreePointersMade => self.three_pointers_made as f64,
            StatKind::ThreePointersAttempted => self.three_pointers_attempted as f64,
            StatKind::FreeThrowsMade => self.free_throws_made as f64,
            StatKind::FreeThrowsAttempted => self.free_throws_attempted as f64,
            StatKind::Minutes => self.minutes,
        };
        Some(value)
    }

    /// Combined `made / attempted`; `None` when nothing was attempted.
    pub fn percentage(&self, shot: ShotType) -> Option<f64> {
        let (made, attempted) = match shot {
            ShotType::FieldGoal => (self.field_goals_made, self.field_goals_attempted),
            ShotType::ThreePointer => (self.three_pointers_made, self.three_pointers_attempted),
            ShotType::FreeThrow => (self.free_throws_made, self.free_throws_attempted),
        };
        (attempted > 0).then(|| made as f64 / attempted as f64)
    }
}

/// Season summary for one player, recomputed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonAggregate {
    pub player_id: PlayerId,
    pub season: Option<String>,
    pub games_played: usize,
    pub totals: StatTotals,
}

impl SeasonAggregate {
    /// Per-game average; `None` with no games or an incomplete optional stat.
    pub fn average(&self, kind: StatKind) -> Option<f64> {
        if self.games_played == 0 {
            return None;
        }
        Some(self.totals.get(kind)? / self.games_played as f64)
    }

    pub fn total(&self, kind: StatKind) -> Option<f64> {
        self.totals.get(kind)
    }

    /// Season percentage as `sum(made) / sum(attempted)`, never a mean of
    /// per-game percentages.
    pub fn percentage(&self, shot: ShotType) -> Option<f64> {
        self.totals.percentage(shot)
    }

    pub fn field_goal_pct(&self) -> Option<f64> {
        self.percentage(ShotType::FieldGoal)
    }

    pub fn three_point_pct(&self) -> Option<f64> {
        self.percentage(ShotType::ThreePointer)
    }

    pub fn free_throw_pct(&self) -> Option<f64> {
        self.percentage(ShotType::FreeThrow)
    }

    pub fn has_data(&self) -> bool {
        self.games_played > 0
    }
}

/// Aggregate an arbitrary set of lines for one player.
///
/// Lines belonging to other players are ignored.
pub fn aggregate_lines(
    player_id: &PlayerId,
    season: Option<&str>,
    lines: &[GameStatLine],
) -> SeasonAggregate {
    let mut totals = StatTotals::default();
    let mut games_played = 0;
    for line in lines.iter().filter(|l| l.player_id() == player_id) {
        totals.add(line);
        games_played += 1;
    }
    SeasonAggregate {
        player_id: player_id.clone(),
        season: season.map(str::to_string),
        games_played,
        totals,
    }
}
