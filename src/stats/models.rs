//! Stat line model and its validating builder

use crate::cli::types::{PlayerId, ShotType, StatKind, TeamCode};
use crate::error::{FieldViolation, HoopsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One player's recorded box score for a single game.
///
/// Only constructible through [`GameStatLineBuilder`] (or deserialization,
/// which goes through the same checks), so every instance satisfies:
/// non-negative counts, `made <= attempted` for each shooting split, finite
/// non-negative minutes, and an offensive/defensive split that sums to total
/// rebounds when recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStatLineRecord")]
pub struct GameStatLine {
    player_id: PlayerId,
    date: NaiveDate,
    opponent: TeamCode,
    minutes: f64,
    points: u32,
    rebounds: u32,
    offensive_rebounds: Option<u32>,
    defensive_rebounds: Option<u32>,
    assists: u32,
    steals: u32,
    blocks: u32,
    turnovers: u32,
    personal_fouls: u32,
    plus_minus: Option<i32>,
    field_goals_made: u32,
    field_goals_attempted: u32,
    three_pointers_made: u32,
    three_pointers_attempted: u32,
    free_throws_made: u32,
    free_throws_attempted: u32,
}

impl GameStatLine {
    pub fn builder(
        player_id: PlayerId,
        date: NaiveDate,
        opponent: TeamCode,
    ) -> GameStatLineBuilder {
        GameStatLineBuilder::new(player_id, date, opponent)
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn opponent(&self) -> &TeamCode {
        &self.opponent
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn rebounds(&self) -> u32 {
        self.rebounds
    }

    pub fn offensive_rebounds(&self) -> Option<u32> {
        self.offensive_rebounds
    }

    pub fn defensive_rebounds(&self) -> Option<u32> {
        self.defensive_rebounds
    }

    pub fn assists(&self) -> u32 {
        self.assists
    }

    pub fn steals(&self) -> u32 {
        self.steals
    }

    pub fn blocks(&self) -> u32 {
        self.blocks
    }

    pub fn turnovers(&self) -> u32 {
        self.turnovers
    }

    pub fn personal_fouls(&self) -> u32 {
        self.personal_fouls
    }

    pub fn plus_minus(&self) -> Option<i32> {
        self.plus_minus
    }

    /// `(made, attempted)` for a shooting split.
    pub fn shooting(&self, shot: ShotType) -> (u32, u32) {
        match shot {
            ShotType::FieldGoal => (self.field_goals_made, self.field_goals_attempted),
            ShotType::ThreePointer => (self.three_pointers_made, self.three_pointers_attempted),
            ShotType::FreeThrow => (self.free_throws_made, self.free_throws_attempted),
        }
    }

    /// Single-game shooting percentage; `None` when nothing was attempted.
    pub fn percentage(&self, shot: ShotType) -> Option<f64> {
        let (made, attempted) = self.shooting(shot);
        (attempted > 0).then(|| made as f64 / attempted as f64)
    }

    /// Value of one stat, `None` when an optional stat was not recorded.
    pub fn stat(&self, kind: StatKind) -> Option<f64> {
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

    /// Like [`stat`](Self::stat) but an unrecorded stat is an error.
    pub fn require(&self, kind: StatKind) -> Result<f64> {
        self.stat(kind).ok_or_else(|| HoopsError::MissingStat {
            stat: kind.to_string(),
            player_id: self.player_id.to_string(),
            date: self.date,
        })
    }

    /// How many of the five double-digit stats reached ten or more.
    pub fn double_digit_count(&self) -> usize {
        [
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
        ]
        .iter()
        .filter(|&&v| v >= 10)
        .count()
    }
}

/// Builder that validates every field before producing a [`GameStatLine`].
///
/// Counts are accepted as signed integers so a negative input can be reported
/// by name instead of failing to type-check at the call site.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use hoops_fantasy::{stats::GameStatLine, PlayerId, TeamCode};
///
/// let line = GameStatLine::builder(
///     PlayerId::new("player_001"),
///     NaiveDate::from_ymd_opt(2024, 10, 26).unwrap(),
///     TeamCode::new("GSW"),
/// )
/// .points(28)
/// .field_goals(10, 20)
/// .build()
/// .unwrap();
/// assert_eq!(line.points(), 28);
/// ```
#[derive(Debug, Clone)]
pub struct GameStatLineBuilder {
    player_id: PlayerId,
    date: NaiveDate,
    opponent: TeamCode,
    minutes: f64,
    points: i64,
    rebounds: i64,
    offensive_rebounds: Option<i64>,
    defensive_rebounds: Option<i64>,
    assists: i64,
    steals: i64,
    blocks: i64,
    turnovers: i64,
    personal_fouls: i64,
    plus_minus: Option<i64>,
    field_goals: (i64, i64),
    three_pointers: (i64, i64),
    free_throws: (i64, i64),
}

impl GameStatLineBuilder {
    pub fn new(player_id: PlayerId, date: NaiveDate, opponent: TeamCode) -> Self {
        Self {
            player_id,
            date,
            opponent,
            minutes: 0.0,
            points: 0,
            rebounds: 0,
            offensive_rebounds: None,
            defensive_rebounds: None,
            assists: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            personal_fouls: 0,
            plus_minus: None,
            field_goals: (0, 0),
            three_pointers: (0, 0),
            free_throws: (0, 0),
        }
    }

    pub fn minutes(mut self, minutes: f64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn rebounds(mut self, rebounds: i64) -> Self {
        self.rebounds = rebounds;
        self
    }

    /// Record the offensive/defensive split. Also sets total rebounds.
    pub fn rebound_split(mut self, offensive: i64, defensive: i64) -> Self {
        self.offensive_rebounds = Some(offensive);
        self.defensive_rebounds = Some(defensive);
        if let Some(total) = offensive.checked_add(defensive) {
            self.rebounds = total;
        }
        self
    }

    pub fn assists(mut self, assists: i64) -> Self {
        self.assists = assists;
        self
    }

    pub fn steals(mut self, steals: i64) -> Self {
        self.steals = steals;
        self
    }

    pub fn blocks(mut self, blocks: i64) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn turnovers(mut self, turnovers: i64) -> Self {
        self.turnovers = turnovers;
        self
    }

    pub fn personal_fouls(mut self, fouls: i64) -> Self {
        self.personal_fouls = fouls;
        self
    }

    pub fn plus_minus(mut self, plus_minus: i64) -> Self {
        self.plus_minus = Some(plus_minus);
        self
    }

    pub fn field_goals(mut self, made: i64, attempted: i64) -> Self {
        self.field_goals = (made, attempted);
        self
    }

    pub fn three_pointers(mut self, made: i64, attempted: i64) -> Self {
        self.three_pointers = (made, attempted);
        self
    }

    pub fn free_throws(mut self, made: i64, attempted: i64) -> Self {
        self.free_throws = (made, attempted);
        self
    }

    /// Validate every field, collecting all violations before failing.
    pub fn build(self) -> Result<GameStatLine> {
        let mut violations = Vec::new();

        let points = count("points", self.points, &mut violations);
        let rebounds = count("rebounds", self.rebounds, &mut violations);
        let offensive_rebounds = self
            .offensive_rebounds
            .map(|v| count("offensive_rebounds", v, &mut violations));
        let defensive_rebounds = self
            .defensive_rebounds
            .map(|v| count("defensive_rebounds", v, &mut violations));
        let assists = count("assists", self.assists, &mut violations);
        let steals = count("steals", self.steals, &mut violations);
        let blocks = count("blocks", self.blocks, &mut violations);
        let turnovers = count("turnovers", self.turnovers, &mut violations);
        let personal_fouls = count("personal_fouls", self.personal_fouls, &mut violations);

        let plus_minus = match self.plus_minus {
            Some(v) => match i32::try_from(v) {
                Ok(pm) => Some(pm),
                Err(_) => {
                    violations.push(FieldViolation {
                        field: "plus_minus",
                        reason: format!("out of range (got {})", v),
                    });
                    None
                }
            },
            None => None,
        };

        let (field_goals_made, field_goals_attempted) = shooting(
            ("field_goals_made", "field_goals_attempted"),
            self.field_goals,
            &mut violations,
        );
        let (three_pointers_made, three_pointers_attempted) = shooting(
            ("three_pointers_made", "three_pointers_attempted"),
            self.three_pointers,
            &mut violations,
        );
        let (free_throws_made, free_throws_attempted) = shooting(
            ("free_throws_made", "free_throws_attempted"),
            self.free_throws,
            &mut violations,
        );

        if self.player_id.as_str().trim().is_empty() {
            violations.push(FieldViolation {
                field: "player_id",
                reason: "must not be empty".to_string(),
            });
        }
        if self.opponent.as_str().is_empty() {
            violations.push(FieldViolation {
                field: "opponent",
                reason: "must not be empty".to_string(),
            });
        }

        if !self.minutes.is_finite() || self.minutes < 0.0 {
            violations.push(FieldViolation {
                field: "minutes",
                reason: format!("must be a non-negative number (got {})", self.minutes),
            });
        }

        match (self.offensive_rebounds, self.defensive_rebounds) {
            (Some(off), Some(def))
                if off >= 0 && def >= 0 && off.checked_add(def) != Some(self.rebounds) =>
            {
                violations.push(FieldViolation {
                    field: "rebounds",
                    reason: format!(
                        "offensive {} + defensive {} does not equal total {}",
                        off, def, self.rebounds
                    ),
                });
            }
            (Some(_), None) => violations.push(FieldViolation {
                field: "defensive_rebounds",
                reason: "missing while offensive_rebounds is recorded".to_string(),
            }),
            (None, Some(_)) => violations.push(FieldViolation {
                field: "offensive_rebounds",
                reason: "missing while defensive_rebounds is recorded".to_string(),
            }),
            _ => {}
        }

        if !violations.is_empty() {
            return Err(HoopsError::Validation { violations });
        }

        Ok(GameStatLine {
            player_id: self.player_id,
            date: self.date,
            opponent: self.opponent,
            minutes: self.minutes,
            points,
            rebounds,
            offensive_rebounds,
            defensive_rebounds,
            assists,
            steals,
            blocks,
            turnovers,
            personal_fouls,
            plus_minus,
            field_goals_made,
            field_goals_attempted,
            three_pointers_made,
            three_pointers_attempted,
            free_throws_made,
            free_throws_attempted,
        })
    }
}

fn count(field: &'static str, value: i64, violations: &mut Vec<FieldViolation>) -> u32 {
    if value < 0 {
        violations.push(FieldViolation {
            field,
            reason: format!("must be non-negative (got {})", value),
        });
        return 0;
    }
    u32::try_from(value).unwrap_or_else(|_| {
        violations.push(FieldViolation {
            field,
            reason: format!("out of range (got {})", value),
        });
        0
    })
}

fn shooting(
    fields: (&'static str, &'static str),
    (made, attempted): (i64, i64),
    violations: &mut Vec<FieldViolation>,
) -> (u32, u32) {
    let made_count = count(fields.0, made, violations);
    let attempted_count = count(fields.1, attempted, violations);
    if made >= 0 && attempted >= 0 && made > attempted {
        violations.push(FieldViolation {
            field: fields.0,
            reason: format!("exceeds attempts ({} > {})", made, attempted),
        });
    }
    (made_count, attempted_count)
}

/// Raw serialized form of a stat line, validated on conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct GameStatLineRecord {
    pub player_id: PlayerId,
    #[serde(alias = "game_date")]
    pub date: NaiveDate,
    pub opponent: String,
    #[serde(default, alias = "minutes_played")]
    pub minutes: f64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub rebounds: i64,
    #[serde(default)]
    pub offensive_rebounds: Option<i64>,
    #[serde(default)]
    pub defensive_rebounds: Option<i64>,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub steals: i64,
    #[serde(default)]
    pub blocks: i64,
    #[serde(default)]
    pub turnovers: i64,
    #[serde(default)]
    pub personal_fouls: i64,
    #[serde(default)]
    pub plus_minus: Option<i64>,
    #[serde(default)]
    pub field_goals_made: i64,
    #[serde(default)]
    pub field_goals_attempted: i64,
    #[serde(default)]
    pub three_pointers_made: i64,
    #[serde(default)]
    pub three_pointers_attempted: i64,
    #[serde(default)]
    pub free_throws_made: i64,
    #[serde(default)]
    pub free_throws_attempted: i64,
}

impl TryFrom<GameStatLineRecord> for GameStatLine {
    type Error = HoopsError;

    fn try_from(record: GameStatLineRecord) -> Result<Self> {
        let mut builder =
            GameStatLineBuilder::new(record.player_id, record.date, TeamCode::new(record.opponent))
                .minutes(record.minutes)
                .points(record.points)
                .rebounds(record.rebounds)
                .assists(record.assists)
                .steals(record.steals)
                .blocks(record.blocks)
                .turnovers(record.turnovers)
                .personal_fouls(record.personal_fouls)
                .field_goals(record.field_goals_made, record.field_goals_attempted)
                .three_pointers(record.three_pointers_made, record.three_pointers_attempted)
                .free_throws(record.free_throws_made, record.free_throws_attempted);

        // Set the split fields directly so a split that disagrees with the
        // recorded total is reported rather than silently recomputed.
        builder.offensive_rebounds = record.offensive_rebounds;
        builder.defensive_rebounds = record.defensive_rebounds;

        if let Some(pm) = record.plus_minus {
            builder = builder.plus_minus(pm);
        }

        builder.build()
    }
}
