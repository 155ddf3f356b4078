//! Error types for the fantasy basketball stat engine

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, HoopsError>;

/// One failed check on a stat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum HoopsError {
    #[error("Invalid stat line: {}", join_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Stat line already recorded for player {player_id} on {date}")]
    DuplicateGame { player_id: String, date: NaiveDate },

    #[error("Not enough games for {context}: need {needed}, have {available}")]
    InsufficientData {
        context: String,
        needed: usize,
        available: usize,
    },

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown stat: {stat}")]
    UnknownStat { stat: String },

    #[error("Invalid scoring configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Stat {stat} was not recorded for player {player_id} on {date}")]
    MissingStat {
        stat: String,
        player_id: String,
        date: NaiveDate,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Stat store lock poisoned by a panicked writer")]
    StorePoisoned,

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

impl HoopsError {
    /// Names of the fields that failed validation, empty for other variants.
    pub fn violated_fields(&self) -> Vec<&'static str> {
        match self {
            HoopsError::Validation { violations } => violations.iter().map(|v| v.field).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        HoopsError::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        HoopsError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn insufficient(
        context: impl Into<String>,
        needed: usize,
        available: usize,
    ) -> Self {
        HoopsError::InsufficientData {
            context: context.into(),
            needed,
            available,
        }
    }
}
