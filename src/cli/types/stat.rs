//! Closed set of recorded stat fields.

use crate::error::HoopsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every stat a game line carries, as a closed enumeration.
///
/// Used as the key of points-format weight maps and to select which stats
/// analytics run over. Parses from the usual box-score abbreviations.
///
/// # Examples
///
/// ```rust
/// use hoops_fantasy::StatKind;
///
/// let stat: StatKind = "3pm".parse().unwrap();
/// assert_eq!(stat, StatKind::ThreePointersMade);
/// assert_eq!(stat.to_string(), "3PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatKind {
    Points,
    Rebounds,
    OffensiveRebounds,
    DefensiveRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    PlusMinus,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreePointersMade,
    ThreePointersAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    Minutes,
}

impl StatKind {
    pub const ALL: [StatKind; 17] = [
        StatKind::Points,
        StatKind::Rebounds,
        StatKind::OffensiveRebounds,
        StatKind::DefensiveRebounds,
        StatKind::Assists,
        StatKind::Steals,
        StatKind::Blocks,
        StatKind::Turnovers,
        StatKind::PersonalFouls,
        StatKind::PlusMinus,
        StatKind::FieldGoalsMade,
        StatKind::FieldGoalsAttempted,
        StatKind::ThreePointersMade,
        StatKind::ThreePointersAttempted,
        StatKind::FreeThrowsMade,
        StatKind::FreeThrowsAttempted,
        StatKind::Minutes,
    ];

    /// The five counting stats that make up a double-double or triple-double.
    pub const DOUBLE_DIGIT: [StatKind; 5] = [
        StatKind::Points,
        StatKind::Rebounds,
        StatKind::Assists,
        StatKind::Steals,
        StatKind::Blocks,
    ];

    /// Box-score abbreviation.
    pub fn code(&self) -> &'static str {
        match self {
            StatKind::Points => "PTS",
            StatKind::Rebounds => "REB",
            StatKind::OffensiveRebounds => "OREB",
            StatKind::DefensiveRebounds => "DREB",
            StatKind::Assists => "AST",
            StatKind::Steals => "STL",
            StatKind::Blocks => "BLK",
            StatKind::Turnovers => "TO",
            StatKind::PersonalFouls => "PF",
            StatKind::PlusMinus => "+/-",
            StatKind::FieldGoalsMade => "FGM",
            StatKind::FieldGoalsAttempted => "FGA",
            StatKind::ThreePointersMade => "3PM",
            StatKind::ThreePointersAttempted => "3PA",
            StatKind::FreeThrowsMade => "FTM",
            StatKind::FreeThrowsAttempted => "FTA",
            StatKind::Minutes => "MIN",
        }
    }

    /// Stats where the smaller number is the better one.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, StatKind::Turnovers | StatKind::PersonalFouls)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for StatKind {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PTS" | "POINTS" => Ok(StatKind::Points),
            "REB" | "REBOUNDS" => Ok(StatKind::Rebounds),
            "OREB" | "OFFENSIVE_REBOUNDS" => Ok(StatKind::OffensiveRebounds),
            "DREB" | "DEFENSIVE_REBOUNDS" => Ok(StatKind::DefensiveRebounds),
            "AST" | "ASSISTS" => Ok(StatKind::Assists),
            "STL" | "STEALS" => Ok(StatKind::Steals),
            "BLK" | "BLOCKS" => Ok(StatKind::Blocks),
            "TO" | "TOV" | "TURNOVERS" => Ok(StatKind::Turnovers),
            "PF" | "PERSONAL_FOULS" => Ok(StatKind::PersonalFouls),
            "+/-" | "PM" | "PLUS_MINUS" => Ok(StatKind::PlusMinus),
            "FGM" | "FIELD_GOALS_MADE" => Ok(StatKind::FieldGoalsMade),
            "FGA" | "FIELD_GOALS_ATTEMPTED" => Ok(StatKind::FieldGoalsAttempted),
            "3PM" | "THREE_POINTERS_MADE" => Ok(StatKind::ThreePointersMade),
            "3PA" | "THREE_POINTERS_ATTEMPTED" => Ok(StatKind::ThreePointersAttempted),
            "FTM" | "FREE_THROWS_MADE" => Ok(StatKind::FreeThrowsMade),
            "FTA" | "FREE_THROWS_ATTEMPTED" => Ok(StatKind::FreeThrowsAttempted),
            "MIN" | "MINUTES" => Ok(StatKind::Minutes),
            _ => Err(HoopsError::UnknownStat {
                stat: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StatKind {
    type Error = HoopsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatKind> for String {
    fn from(stat: StatKind) -> Self {
        stat.code().to_string()
    }
}

/// Shooting splits that carry a made/attempted pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShotType {
    FieldGoal,
    ThreePointer,
    FreeThrow,
}

impl ShotType {
    pub const ALL: [ShotType; 3] = [
        ShotType::FieldGoal,
        ShotType::ThreePointer,
        ShotType::FreeThrow,
    ];

    pub fn made_stat(&self) -> StatKind {
        match self {
            ShotType::FieldGoal => StatKind::FieldGoalsMade,
            ShotType::ThreePointer => StatKind::ThreePointersMade,
            ShotType::FreeThrow => StatKind::FreeThrowsMade,
        }
    }

    pub fn attempted_stat(&self) -> StatKind {
        match self {
            ShotType::FieldGoal => StatKind::FieldGoalsAttempted,
            ShotType::ThreePointer => StatKind::ThreePointersAttempted,
            ShotType::FreeThrow => StatKind::FreeThrowsAttempted,
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotType::FieldGoal => "FG%",
            ShotType::ThreePointer => "3P%",
            ShotType::FreeThrow => "FT%",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_parses_back() {
        for stat in StatKind::ALL {
            assert_eq!(stat.code().parse::<StatKind>().unwrap(), stat);
        }
    }

    #[test]
    fn test_long_names_and_case() {
        assert_eq!("rebounds".parse::<StatKind>().unwrap(), StatKind::Rebounds);
        assert_eq!("tov".parse::<StatKind>().unwrap(), StatKind::Turnovers);
        assert_eq!("pm".parse::<StatKind>().unwrap(), StatKind::PlusMinus);
    }

    #[test]
    fn test_unknown_stat() {
        let err = "dunks".parse::<StatKind>().unwrap_err();
        assert!(matches!(err, HoopsError::UnknownStat { stat } if stat == "dunks"));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&StatKind::ThreePointersMade).unwrap();
        assert_eq!(json, "\"3PM\"");
        let back: StatKind = serde_json::from_str("\"AST\"").unwrap();
        assert_eq!(back, StatKind::Assists);
        assert!(serde_json::from_str::<StatKind>("\"XYZ\"").is_err());
    }

    #[test]
    fn test_lower_is_better() {
        assert!(StatKind::Turnovers.lower_is_better());
        assert!(StatKind::PersonalFouls.lower_is_better());
        assert!(!StatKind::Points.lower_is_better());
    }

    #[test]
    fn test_shot_type_stat_pairs() {
        assert_eq!(ShotType::FieldGoal.made_stat(), StatKind::FieldGoalsMade);
        assert_eq!(
            ShotType::FreeThrow.attempted_stat(),
            StatKind::FreeThrowsAttempted
        );
        assert_eq!(ShotType::ThreePointer.to_string(), "3P%");
    }
}
