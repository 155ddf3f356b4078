//! Identifier types for players and teams.

use crate::error::{HoopsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for opaque player identifiers.
///
/// The registry that issues these ids lives outside the engine; all the engine
/// needs is a stable key to group stat lines by.
///
/// # Examples
///
/// ```rust
/// use hoops_fantasy::PlayerId;
///
/// let player_id = PlayerId::new("player_001");
/// assert_eq!(player_id.as_str(), "player_001");
/// assert_eq!(player_id.to_string(), "player_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(HoopsError::invalid_input("player id must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Team abbreviation such as `GSW` or `LAL`, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(pub String);

impl TeamCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(HoopsError::invalid_input("team code must not be empty"));
        }
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str_trims() {
        let id: PlayerId = "  player_001 ".parse().unwrap();
        assert_eq!(id, PlayerId::new("player_001"));
    }

    #[test]
    fn test_player_id_from_str_rejects_empty() {
        assert!("   ".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_team_code_is_upper_cased() {
        assert_eq!(TeamCode::new("gsw").as_str(), "GSW");
        assert_eq!(TeamCode::new(" lal ").to_string(), "LAL");
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayerId::new("p1")).unwrap();
        assert_eq!(json, "\"p1\"");
    }
}
