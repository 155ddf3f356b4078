//! Unit tests for command handlers

use super::*;
use crate::cli::types::{PlayerId, StatKind, TeamCode};
use crate::error::HoopsError;
use crate::scoring::{CategoryConfig, FantasyFormatConfig, PointsConfig};
use crate::stats::{GameStatLine, StatStore};
use chrono::NaiveDate;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
}

fn game(player: &str, day: u32, points: i64, rebounds: i64) -> GameStatLine {
    GameStatLine::builder(PlayerId::new(player), d(day), TeamCode::new("MIA"))
        .minutes(32.0)
        .points(points)
        .rebounds(rebounds)
        .assists(4)
        .turnovers(2)
        .field_goals(points / 3, 16)
        .three_pointers(1, 4)
        .free_throws(2, 2)
        .build()
        .unwrap()
}

fn context(format: FantasyFormatConfig, as_json: bool) -> CommandContext {
    let mut store = StatStore::new();
    store
        .record_all(
            vec![
                game("p1", 1, 18, 6),
                game("p1", 2, 24, 8),
                game("p1", 3, 30, 10),
                game("p2", 1, 12, 12),
                game("p2", 2, 12, 12),
            ],
            false,
        )
        .unwrap();
    CommandContext::new(store, format, as_json)
}

fn output(f: impl FnOnce(&mut Vec<u8>) -> crate::error::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
mod season_command_tests {
    use super::*;

    #[test]
    fn test_season_text() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let text = output(|out| {
            season::handle_season(&ctx, &PlayerId::new("p1"), "Nov", d(1), d(30), out)
        });
        assert!(text.contains("Games played: 3"));
        assert!(text.contains("PTS   avg   24.0"));
        assert!(text.contains("FT%   100.0%"));
    }

    #[test]
    fn test_season_json_round_numbers() {
        let ctx = context(FantasyFormatConfig::default(), true);
        let text = output(|out| {
            season::handle_season(&ctx, &PlayerId::new("p2"), "Nov", d(1), d(30), out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["games_played"], 2);
        assert_eq!(value["season"], "Nov");
    }

    #[test]
    fn test_season_inverted_window() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let mut out = Vec::new();
        let err = season::handle_season(&ctx, &PlayerId::new("p1"), "x", d(5), d(1), &mut out)
            .unwrap_err();
        assert!(matches!(err, HoopsError::InvalidInput { .. }));
    }

    #[test]
    fn test_recent_newest_first() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let text = output(|out| season::handle_recent(&ctx, &PlayerId::new("p1"), 2, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-11-03"));
        assert!(lines[1].starts_with("2024-11-02"));
    }

    #[test]
    fn test_recent_unknown_player() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let text = output(|out| season::handle_recent(&ctx, &PlayerId::new("zz"), 2, out));
        assert!(text.contains("No games recorded for zz"));
    }
}

#[cfg(test)]
mod score_command_tests {
    use super::*;

    #[test]
    fn test_score_points_json() {
        let config = PointsConfig::from_weights([(StatKind::Points, 1.0)]);
        let ctx = context(FantasyFormatConfig::Points(config), true);
        let text = output(|out| score::handle_score(&ctx, &PlayerId::new("p1"), None, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["format"], "points");
        assert_eq!(value["total"], 72.0);
    }

    #[test]
    fn test_score_last_games_chronological() {
        let config = PointsConfig::from_weights([(StatKind::Points, 1.0)]);
        let ctx = context(FantasyFormatConfig::Points(config), false);
        let text = output(|out| score::handle_score(&ctx, &PlayerId::new("p1"), Some(2), out));
        let day2 = text.find("2024-11-02").unwrap();
        let day3 = text.find("2024-11-03").unwrap();
        assert!(day2 < day3);
        assert!(!text.contains("2024-11-01"));
        assert!(text.contains("Total: 54.0"));
    }

    #[test]
    fn test_score_category_text() {
        let config = CategoryConfig::from_keys(&["PTS", "TO"]).unwrap();
        let ctx = context(FantasyFormatConfig::Category(config), false);
        let text = output(|out| score::handle_score(&ctx, &PlayerId::new("p2"), None, out));
        assert!(text.contains("PTS  24.0"));
        assert!(text.contains("TO   4.0 (lower is better)"));
    }

    #[test]
    fn test_roto_requires_category_format() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let mut out = Vec::new();
        let err = score::handle_roto(&ctx, &[], &mut out).unwrap_err();
        assert!(matches!(err, HoopsError::InvalidConfig { .. }));
    }

    #[test]
    fn test_roto_all_players_sorted() {
        let ctx = context(FantasyFormatConfig::Rotisserie(CategoryConfig::default()), true);
        let text = output(|out| score::handle_roto(&ctx, &[], out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["player_id"], "p1");
        assert_eq!(entries[1]["games_played"], 2);
    }
}

#[cfg(test)]
mod analysis_command_tests {
    use super::*;
    use crate::analytics::DEFAULT_STABLE_BAND_PCT;

    #[test]
    fn test_trend_text() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let params = analysis::TrendParams {
            player_id: PlayerId::new("p1"),
            recent: 1,
            historical: 2,
            stats: vec![StatKind::Points],
            fantasy: true,
            band: DEFAULT_STABLE_BAND_PCT,
        };
        let text = output(|out| analysis::handle_trend(&ctx, &params, out));
        assert!(text.contains("last 1 games vs the 2 before"));
        assert!(text.contains("+42.9%"));
        assert!(text.contains("FPTS"));
        assert!(text.contains("Improving"));
    }

    #[test]
    fn test_trend_fantasy_needs_points_format() {
        let ctx = context(FantasyFormatConfig::Category(CategoryConfig::default()), false);
        let params = analysis::TrendParams {
            player_id: PlayerId::new("p1"),
            recent: 1,
            historical: 1,
            stats: vec![],
            fantasy: true,
            band: DEFAULT_STABLE_BAND_PCT,
        };
        let mut out = Vec::new();
        assert!(analysis::handle_trend(&ctx, &params, &mut out).is_err());
    }

    #[test]
    fn test_consistency_json() {
        let ctx = context(FantasyFormatConfig::default(), true);
        let text = output(|out| {
            analysis::handle_consistency(&ctx, &PlayerId::new("p2"), Some(StatKind::Points), 5, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["games"], 2);
        assert_eq!(value["std_dev"], 0.0);
        assert_eq!(value["score"], 1.0);
    }

    #[test]
    fn test_consistency_too_few_games() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let mut out = Vec::new();
        let err = analysis::handle_consistency(&ctx, &PlayerId::new("p1"), None, 1, &mut out)
            .unwrap_err();
        assert!(matches!(err, HoopsError::InsufficientData { .. }));
    }

    #[test]
    fn test_compare_with_category_tally() {
        let ctx = context(FantasyFormatConfig::Category(CategoryConfig::default()), true);
        let text = output(|out| {
            analysis::handle_compare(&ctx, &PlayerId::new("p1"), &PlayerId::new("p2"), 2, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["comparison"]["first"], "p1");
        assert!(value["categories"]["first_wins"].is_u64());
    }

    #[test]
    fn test_compare_points_format_has_no_tally() {
        let ctx = context(FantasyFormatConfig::default(), true);
        let text = output(|out| {
            analysis::handle_compare(&ctx, &PlayerId::new("p1"), &PlayerId::new("p2"), 2, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("categories").is_none());
    }

    #[test]
    fn test_project_text() {
        let ctx = context(FantasyFormatConfig::default(), false);
        let opponent = TeamCode::new("den");
        let text = output(|out| {
            analysis::handle_project(&ctx, &PlayerId::new("p2"), 5, Some(&opponent), out)
        });
        assert!(text.starts_with("p2 vs DEN (from 2 games)"));
        assert!(text.contains("PTS     12.0  [12.0 - 12.0]"));
        assert!(text.contains("Projected fantasy points:"));
    }
}

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_dispatch_from_parsed_args() {
        let cli = Cli::try_parse_from([
            "hoops-fantasy",
            "recent",
            "--stats",
            "unused.json",
            "--player",
            "p1",
            "-n",
            "1",
        ])
        .unwrap();
        let ctx = context(FantasyFormatConfig::default(), false);
        let text = output(|out| run(&ctx, &cli.command, out));
        assert!(text.starts_with("2024-11-03"));
    }

    #[test]
    fn test_unknown_stat_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "hoops-fantasy",
            "consistency",
            "--stats",
            "s.json",
            "--player",
            "p1",
            "--stat",
            "XYZ",
        ]);
        assert!(result.is_err());
    }
}
