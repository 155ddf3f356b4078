//! Trend, consistency, comparison and projection commands.

use std::io::Write;

use serde::Serialize;

use super::common::{fmt_opt, fmt_pct, write_json, CommandContext};
use crate::{
    analytics::{
        Comparison, Measure, Metric, PlayerAnalyzer, Projection, RecentAverageProjector,
        TrendWindow,
    },
    cli::types::{PlayerId, StatKind, TeamCode},
    error::{HoopsError, Result},
    scoring::{category_matchup, score_category, FantasyFormatConfig, MatchupTally, Winner},
    stats::aggregate_lines,
};

/// Inputs for [`handle_trend`].
#[derive(Debug, Clone)]
pub struct TrendParams {
    pub player_id: PlayerId,
    pub recent: usize,
    pub historical: usize,
    pub stats: Vec<StatKind>,
    pub fantasy: bool,
    pub band: f64,
}

pub fn handle_trend(
    ctx: &CommandContext,
    params: &TrendParams,
    out: &mut impl Write,
) -> Result<()> {
    let window = TrendWindow::new(params.recent, params.historical)?;

    let mut metrics: Vec<Metric<'_>> = params.stats.iter().map(|&s| Metric::Stat(s)).collect();
    if params.fantasy {
        metrics.push(Metric::FantasyPoints(ctx.points_config()?));
    }
    if metrics.is_empty() {
        metrics.push(Metric::Stat(StatKind::Points));
    }

    let trends =
        PlayerAnalyzer::new(&ctx.store).trend(&params.player_id, window, &metrics, params.band)?;
    if ctx.as_json {
        return write_json(out, &trends);
    }

    writeln!(
        out,
        "{}: last {} games vs the {} before",
        params.player_id, window.recent(), window.historical()
    )?;
    for t in &trends {
        let change = match t.percent_change {
            Some(pct) => format!("{:+.1}%", pct),
            None => "undefined".to_string(),
        };
        writeln!(
            out,
            "  {:<5} {:>6.2} vs {:>6.2}  {:>9}  {:?}",
            t.metric, t.recent_avg, t.historical_avg, change, t.direction
        )?;
    }
    Ok(())
}

/// Consistency of one stat, or of fantasy points when no stat is named.
pub fn handle_consistency(
    ctx: &CommandContext,
    player_id: &PlayerId,
    stat: Option<StatKind>,
    games: usize,
    out: &mut impl Write,
) -> Result<()> {
    let metric = match stat {
        Some(stat) => Metric::Stat(stat),
        None => match &ctx.format {
            FantasyFormatConfig::Points(config) => Metric::FantasyPoints(config),
            _ => Metric::Stat(StatKind::Points),
        },
    };

    let result = PlayerAnalyzer::new(&ctx.store).consistency(player_id, metric, games)?;
    if ctx.as_json {
        return write_json(out, &result);
    }

    writeln!(out, "{} {} over {} games", player_id, metric.label(), result.games)?;
    writeln!(out, "  Mean:    {:.2}", result.mean)?;
    writeln!(out, "  Std dev: {:.2}", result.std_dev)?;
    writeln!(out, "  CV:      {}", fmt_opt(result.coefficient_of_variation, 3))?;
    writeln!(out, "  Score:   {}", fmt_opt(result.score, 3))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct CompareReport {
    comparison: Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<MatchupTally>,
}

/// Two players over their recent games. Category leagues also get the
/// head-to-head category tally.
pub fn handle_compare(
    ctx: &CommandContext,
    first: &PlayerId,
    second: &PlayerId,
    games: usize,
    out: &mut impl Write,
) -> Result<()> {
    let comparison =
        PlayerAnalyzer::new(&ctx.store).compare(first, second, games, &Measure::standard())?;

    let categories = match ctx.category_config() {
        Ok(config) => {
            let first_lines = ctx.store.recent(first, games)?;
            let second_lines = ctx.store.recent(second, games)?;
            Some(category_matchup(
                &score_category(&aggregate_lines(first, None, &first_lines), config),
                &score_category(&aggregate_lines(second, None, &second_lines), config),
            ))
        }
        Err(HoopsError::InvalidConfig { .. }) => None,
        Err(e) => return Err(e),
    };

    let report = CompareReport {
        comparison,
        categories,
    };
    if ctx.as_json {
        return write_json(out, &report);
    }

    let c = &report.comparison;
    writeln!(
        out,
        "{} ({} games) vs {} ({} games)",
        c.first, c.first_games, c.second, c.second_games
    )?;
    for row in &c.rows {
        let winner = match row.winner {
            Some(Winner::First) => c.first.as_str(),
            Some(Winner::Second) => c.second.as_str(),
            Some(Winner::Tie) => "tie",
            None => "-",
        };
        let is_pct = row.measure.ends_with('%');
        let show = |v: Option<f64>| if is_pct { fmt_pct(v) } else { fmt_opt(v, 2) };
        writeln!(
            out,
            "  {:<5} {:>8} {:>8}  {}",
            row.measure,
            show(row.first),
            show(row.second),
            winner
        )?;
    }
    if let Some(tally) = &report.categories {
        writeln!(
            out,
            "Categories: {}-{}-{}",
            tally.first_wins, tally.second_wins, tally.ties
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ProjectReport {
    projection: Projection,
    #[serde(skip_serializing_if = "Option::is_none")]
    fantasy_points: Option<f64>,
}

const PROJECTED_STATS: [StatKind; 9] = [
    StatKind::Minutes,
    StatKind::Points,
    StatKind::Rebounds,
    StatKind::Assists,
    StatKind::Steals,
    StatKind::Blocks,
    StatKind::Turnovers,
    StatKind::ThreePointersMade,
    StatKind::FreeThrowsMade,
];

/// Recent-average projection; points leagues also get projected fantasy
/// points.
pub fn handle_project(
    ctx: &CommandContext,
    player_id: &PlayerId,
    games: usize,
    opponent: Option<&TeamCode>,
    out: &mut impl Write,
) -> Result<()> {
    let mut stats = PROJECTED_STATS.to_vec();
    if let FantasyFormatConfig::Points(config) = &ctx.format {
        stats.extend(config.scored().filter(|s| !PROJECTED_STATS.contains(s)));
    }

    let projection = PlayerAnalyzer::new(&ctx.store).project(
        &RecentAverageProjector,
        player_id,
        opponent,
        games,
        &stats,
    )?;
    let fantasy_points = match &ctx.format {
        FantasyFormatConfig::Points(config) => Some(projection.fantasy_points(config)?),
        _ => None,
    };

    let report = ProjectReport {
        projection,
        fantasy_points,
    };
    if ctx.as_json {
        return write_json(out, &report);
    }

    let p = &report.projection;
    match &p.opponent {
        Some(team) => writeln!(out, "{} vs {} (from {} games)", p.player_id, team, p.games_used)?,
        None => writeln!(out, "{} (from {} games)", p.player_id, p.games_used)?,
    }
    for s in &p.stats {
        writeln!(
            out,
            "  {:<5} {:>6.1}  [{} - {}]",
            s.stat.code(),
            s.mean,
            fmt_opt(s.low, 1),
            fmt_opt(s.high, 1)
        )?;
    }
    if let Some(points) = report.fantasy_points {
        writeln!(out, "Projected fantasy points: {:.1}", points)?;
    }
    Ok(())
}
