//! Fantasy scoring commands.

use std::io::Write;

use tracing::debug;

use super::common::{fmt_opt, write_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    error::Result,
    scoring::{league_rotisserie_totals, score_lines, CategoryLine, FormatScore},
};

/// Score a player's games (all of them, or the last `last`) under the
/// league format.
pub fn handle_score(
    ctx: &CommandContext,
    player_id: &PlayerId,
    last: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let lines = match last {
        Some(n) => {
            let mut recent = ctx.store.recent(player_id, n)?;
            recent.reverse();
            recent
        }
        None => ctx.store.lines(player_id),
    };
    debug!(player = %player_id, games = lines.len(), "scoring");

    let score = score_lines(player_id, &lines, &ctx.format)?;
    if ctx.as_json {
        return write_json(out, &score);
    }

    writeln!(out, "{} ({} format, {} games)", player_id, ctx.format.name(), lines.len())?;
    match &score {
        FormatScore::Points(series) => {
            for (line, points) in lines.iter().zip(&series.scores) {
                writeln!(out, "  {} vs {}  {:.1}", line.date(), line.opponent(), points)?;
            }
            writeln!(out, "Total: {:.1}", series.total)?;
            writeln!(out, "Average: {}", fmt_opt(series.average, 2))?;
        }
        FormatScore::Category(categories) | FormatScore::Rotisserie(categories) => {
            write_categories(out, categories)?;
        }
    }
    Ok(())
}

/// Category totals for every player in the store, or only `players`.
pub fn handle_roto(
    ctx: &CommandContext,
    players: &[PlayerId],
    out: &mut impl Write,
) -> Result<()> {
    let config = ctx.category_config()?;
    let ids = if players.is_empty() {
        ctx.store.players()
    } else {
        players.to_vec()
    };
    let rosters: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let lines = ctx.store.lines(&id);
            (id, lines)
        })
        .collect();

    let entries = league_rotisserie_totals(&rosters, config);
    if ctx.as_json {
        return write_json(out, &entries);
    }

    for entry in &entries {
        writeln!(out, "{} ({} games)", entry.player_id, entry.games_played)?;
        write_categories(out, &entry.totals)?;
    }
    Ok(())
}

fn write_categories(out: &mut impl Write, categories: &CategoryLine) -> Result<()> {
    for value in &categories.values {
        let precision = if value.category.shot_type().is_some() { 3 } else { 1 };
        let marker = if value.negative { " (lower is better)" } else { "" };
        writeln!(
            out,
            "  {:<4} {}{}",
            value.category.key(),
            fmt_opt(value.value, precision),
            marker
        )?;
    }
    Ok(())
}
