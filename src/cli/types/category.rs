//! Fantasy scoring categories.

use super::stat::{ShotType, StatKind};
use crate::error::HoopsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine recognized category keys for category and rotisserie leagues.
///
/// # Examples
///
/// ```rust
/// use hoops_fantasy::Category;
///
/// let cat: Category = "FG%".parse().unwrap();
/// assert_eq!(cat, Category::FieldGoalPct);
/// assert!("XYZ".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    FieldGoalPct,
    FreeThrowPct,
    ThreePointersMade,
    Turnovers,
}

impl Category {
    /// Standard nine-category ordering.
    pub const ALL: [Category; 9] = [
        Category::Points,
        Category::Rebounds,
        Category::Assists,
        Category::Steals,
        Category::Blocks,
        Category::FieldGoalPct,
        Category::FreeThrowPct,
        Category::ThreePointersMade,
        Category::Turnovers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Points => "PTS",
            Category::Rebounds => "REB",
            Category::Assists => "AST",
            Category::Steals => "STL",
            Category::Blocks => "BLK",
            Category::FieldGoalPct => "FG%",
            Category::FreeThrowPct => "FT%",
            Category::ThreePointersMade => "3PM",
            Category::Turnovers => "TO",
        }
    }

    /// Counting stat behind this category, `None` for percentage categories.
    pub fn counting_stat(&self) -> Option<StatKind> {
        match self {
            Category::Points => Some(StatKind::Points),
            Category::Rebounds => Some(StatKind::Rebounds),
            Category::Assists => Some(StatKind::Assists),
            Category::Steals => Some(StatKind::Steals),
            Category::Blocks => Some(StatKind::Blocks),
            Category::ThreePointersMade => Some(StatKind::ThreePointersMade),
            Category::Turnovers => Some(StatKind::Turnovers),
            Category::FieldGoalPct | Category::FreeThrowPct => None,
        }
    }

    /// Shooting split behind this category, `None` for counting categories.
    pub fn shot_type(&self) -> Option<ShotType> {
        match self {
            Category::FieldGoalPct => Some(ShotType::FieldGoal),
            Category::FreeThrowPct => Some(ShotType::FreeThrow),
            _ => None,
        }
    }

    /// Whether leagues conventionally treat this category as lower-is-better.
    pub fn negative_by_default(&self) -> bool {
        matches!(self, Category::Turnovers)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PTS" => Ok(Category::Points),
            "REB" => Ok(Category::Rebounds),
            "AST" => Ok(Category::Assists),
            "STL" => Ok(Category::Steals),
            "BLK" => Ok(Category::Blocks),
            "FG%" => Ok(Category::FieldGoalPct),
            "FT%" => Ok(Category::FreeThrowPct),
            "3PM" => Ok(Category::ThreePointersMade),
            "TO" => Ok(Category::Turnovers),
            _ => Err(HoopsError::UnknownCategory {
                category: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = HoopsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}
