//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod hoops_error_tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 26).unwrap()
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = HoopsError::from(json_error);

        match error {
            HoopsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HoopsError::from(io_error);

        match error {
            HoopsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_date_parse_error_conversion() {
        let parse_error = "2024-13-45".parse::<NaiveDate>().unwrap_err();
        let error = HoopsError::from(parse_error);

        match error {
            HoopsError::InvalidDate(_) => (),
            _ => panic!("Expected InvalidDate error variant"),
        }
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let error = HoopsError::Validation {
            violations: vec![
                FieldViolation {
                    field: "steals",
                    reason: "must be non-negative (got -1)".to_string(),
                },
                FieldViolation {
                    field: "free_throws_made",
                    reason: "exceeds attempts (7 > 6)".to_string(),
                },
            ],
        };

        let message = error.to_string();
        assert!(message.contains("steals must be non-negative"));
        assert!(message.contains("free_throws_made exceeds attempts"));
        assert_eq!(error.violated_fields(), vec!["steals", "free_throws_made"]);
    }

    #[test]
    fn test_violated_fields_empty_for_other_variants() {
        let error = HoopsError::StorePoisoned;
        assert!(error.violated_fields().is_empty());
    }

    #[test]
    fn test_duplicate_game_error() {
        let error = HoopsError::DuplicateGame {
            player_id: "player_001".to_string(),
            date: date(),
        };

        let message = error.to_string();
        assert!(message.contains("player_001"));
        assert!(message.contains("2024-10-26"));
    }

    #[test]
    fn test_insufficient_data_error() {
        let error = HoopsError::insufficient("consistency", 2, 1);
        assert_eq!(
            error.to_string(),
            "Not enough games for consistency: need 2, have 1"
        );
    }

    #[test]
    fn test_missing_stat_error() {
        let error = HoopsError::MissingStat {
            stat: "OREB".to_string(),
            player_id: "player_001".to_string(),
            date: date(),
        };
        assert!(error.to_string().contains("OREB"));
    }

    #[test]
    fn test_config_errors() {
        let error = HoopsError::UnknownCategory {
            category: "XYZ".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown category: XYZ");

        let error = HoopsError::invalid_config("no weight for FGA");
        assert_eq!(
            error.to_string(),
            "Invalid scoring configuration: no weight for FGA"
        );

        let error = HoopsError::invalid_input("n must be at least 1");
        assert!(matches!(error, HoopsError::InvalidInput { .. }));
    }

    #[test]
    fn test_error_debug_format() {
        let error = HoopsError::UnknownStat {
            stat: "dunks".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownStat"));
        assert!(debug_str.contains("dunks"));
    }
}
