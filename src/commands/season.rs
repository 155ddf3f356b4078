//! Season summaries and recent game logs.

use std::io::Write;

use chrono::NaiveDate;

use super::common::{fmt_opt, fmt_pct, write_json, CommandContext};
use crate::{
    cli::types::{PlayerId, SeasonWindow, ShotType, StatKind},
    error::Result,
    stats::GameStatLine,
};

const SUMMARY_STATS: [StatKind; 8] = [
    StatKind::Minutes,
    StatKind::Points,
    StatKind::Rebounds,
    StatKind::Assists,
    StatKind::Steals,
    StatKind::Blocks,
    StatKind::Turnovers,
    StatKind::ThreePointersMade,
];

/// Print a player's aggregate over `[from, to]`.
pub fn handle_season(
    ctx: &CommandContext,
    player_id: &PlayerId,
    label: &str,
    from: NaiveDate,
    to: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let window = SeasonWindow::new(label, from, to)?;
    let aggregate = ctx.store.season_aggregate(player_id, &window);

    if ctx.as_json {
        return write_json(out, &aggregate);
    }

    writeln!(out, "{} - {}", player_id, window)?;
    writeln!(out, "Games played: {}", aggregate.games_played)?;
    if !aggregate.has_data() {
        return Ok(());
    }
    for stat in SUMMARY_STATS {
        writeln!(
            out,
            "  {:<5} avg {:>6}  total {:>7}",
            stat.code(),
            fmt_opt(aggregate.average(stat), 1),
            fmt_opt(aggregate.total(stat), 0)
        )?;
    }
    for shot in ShotType::ALL {
        writeln!(out, "  {:<5} {}", shot.to_string(), fmt_pct(aggregate.percentage(shot)))?;
    }
    Ok(())
}

/// Print a player's last `games` games, newest first.
pub fn handle_recent(
    ctx: &CommandContext,
    player_id: &PlayerId,
    games: usize,
    out: &mut impl Write,
) -> Result<()> {
    let lines = ctx.store.recent(player_id, games)?;

    if ctx.as_json {
        return write_json(out, &lines);
    }

    if lines.is_empty() {
        writeln!(out, "No games recorded for {}", player_id)?;
        return Ok(());
    }
    for line in &lines {
        writeln!(out, "{}", game_summary(line))?;
    }
    Ok(())
}

fn game_summary(line: &GameStatLine) -> String {
    let (fgm, fga) = line.shooting(ShotType::FieldGoal);
    let (tpm, tpa) = line.shooting(ShotType::ThreePointer);
    let (ftm, fta) = line.shooting(ShotType::FreeThrow);
    format!(
        concat!(
            "{} vs {}  {:>4.1} min  {} pts {} reb {} ast {} stl {} blk {} to  ",
            "FG {}/{} 3P {}/{} FT {}/{}"
        ),
        line.date(),
        line.opponent(),
        line.minutes(),
        line.points(),
        line.rebounds(),
        line.assists(),
        line.steals(),
        line.blocks(),
        line.turnovers(),
        fgm,
        fga,
        tpm,
        tpa,
        ftm,
        fta
    )
}
