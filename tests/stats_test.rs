//! Integration tests for the stat store

use chrono::NaiveDate;
use hoops_fantasy::{
    stats::{GameStatLine, RecordOutcome, SharedStatStore, StatStore},
    HoopsError, PlayerId, SeasonWindow, ShotType, StatKind, TeamCode,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn fg_line(day: u32, made: i64, attempted: i64, points: i64) -> GameStatLine {
    GameStatLine::builder(PlayerId::new("tatum"), date(11, day), TeamCode::new("MIL"))
        .minutes(36.0)
        .points(points)
        .field_goals(made, attempted)
        .build()
        .unwrap()
}

#[test]
fn test_season_shooting_is_ratio_of_sums() {
    let mut store = StatStore::new();
    store.record(fg_line(1, 4, 10, 10), false).unwrap();
    store.record(fg_line(2, 6, 10, 14), false).unwrap();
    store.record(fg_line(3, 0, 0, 0), false).unwrap();

    let season = SeasonWindow::new("Nov", date(11, 1), date(11, 30)).unwrap();
    let aggregate = store.season_aggregate(&PlayerId::new("tatum"), &season);

    assert_eq!(aggregate.games_played, 3);
    assert_eq!(aggregate.field_goal_pct(), Some(0.5));
    assert_eq!(aggregate.average(StatKind::Points), Some(8.0));
    assert_eq!(aggregate.percentage(ShotType::FreeThrow), None);
}

#[test]
fn test_duplicate_then_overwrite() {
    let mut store = StatStore::new();
    store.record(fg_line(1, 4, 10, 10), false).unwrap();

    let err = store.record(fg_line(1, 9, 12, 22), false).unwrap_err();
    assert!(matches!(err, HoopsError::DuplicateGame { .. }));

    let outcome = store.record(fg_line(1, 9, 12, 22), true).unwrap();
    assert!(matches!(outcome, RecordOutcome::Replaced(old) if old.points() == 10));

    let season = SeasonWindow::new("Nov", date(11, 1), date(11, 30)).unwrap();
    let aggregate = store.season_aggregate(&PlayerId::new("tatum"), &season);
    assert_eq!(aggregate.games_played, 1);
    assert_eq!(aggregate.total(StatKind::Points), Some(22.0));
    assert_eq!(aggregate.total(StatKind::FieldGoalsMade), Some(9.0));
}

#[test]
fn test_recent_never_pads() {
    let mut store = StatStore::new();
    store.record(fg_line(3, 1, 2, 2), false).unwrap();
    store.record(fg_line(1, 1, 2, 2), false).unwrap();

    let recent = store.recent(&PlayerId::new("tatum"), 10).unwrap();
    let dates: Vec<NaiveDate> = recent.iter().map(|l| l.date()).collect();
    assert_eq!(dates, vec![date(11, 3), date(11, 1)]);
}

#[test]
fn test_invalid_line_is_never_stored() {
    let result = GameStatLine::builder(PlayerId::new("tatum"), date(11, 1), TeamCode::new("MIL"))
        .three_pointers(4, 3)
        .rebounds(-1)
        .build();
    let err = result.unwrap_err();
    let fields = err.violated_fields();
    assert!(fields.contains(&"three_pointers_made"));
    assert!(fields.contains(&"rebounds"));
}

#[test]
fn test_stat_lines_from_json() {
    let json = r#"[
        {"player_id": "tatum", "game_date": "2024-11-05", "opponent": "nyk",
         "minutes_played": 38.5, "points": 31, "rebounds": 9,
         "offensive_rebounds": 2, "defensive_rebounds": 7, "plus_minus": 12,
         "field_goals_made": 11, "field_goals_attempted": 22}
    ]"#;
    let lines: Vec<GameStatLine> = serde_json::from_str(json).unwrap();
    assert_eq!(lines[0].opponent().as_str(), "NYK");
    assert_eq!(lines[0].stat(StatKind::PlusMinus), Some(12.0));
    assert_eq!(lines[0].stat(StatKind::OffensiveRebounds), Some(2.0));
    assert_eq!(lines[0].minutes(), 38.5);
}

#[test]
fn test_shared_store_across_threads() {
    let shared = SharedStatStore::default();
    let handles: Vec<_> = (1..=4)
        .map(|day| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.record(fg_line(day, 1, 1, 2), false))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let recent = shared.recent(&PlayerId::new("tatum"), 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date(), date(11, 4));
    assert_eq!(shared.snapshot().unwrap().len(), 4);
}
