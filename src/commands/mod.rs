//! Command implementations for the hoops-fantasy CLI
//!
//! Every handler writes to the given output so it can be driven from tests
//! as well as from `main`.

pub mod analysis;
pub mod common;
pub mod score;
pub mod season;

#[cfg(test)]
mod tests;

pub use common::CommandContext;

use std::io::Write;

use crate::{cli::Commands, error::Result};

/// Run a parsed subcommand against an already loaded context.
pub fn run(ctx: &CommandContext, command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Season {
            player,
            from,
            to,
            label,
            ..
        } => season::handle_season(ctx, player, label, *from, *to, out),

        Commands::Recent { player, games, .. } => season::handle_recent(ctx, player, *games, out),

        Commands::Score { player, last, .. } => score::handle_score(ctx, player, *last, out),

        Commands::Roto { players, .. } => score::handle_roto(ctx, players, out),

        Commands::Trend {
            player,
            recent,
            historical,
            stats,
            fantasy,
            band,
            ..
        } => analysis::handle_trend(
            ctx,
            &analysis::TrendParams {
                player_id: player.clone(),
                recent: *recent,
                historical: *historical,
                stats: stats.clone(),
                fantasy: *fantasy,
                band: *band,
            },
            out,
        ),

        Commands::Consistency {
            player,
            stat,
            games,
            ..
        } => analysis::handle_consistency(ctx, player, *stat, *games, out),

        Commands::Compare {
            player,
            against,
            games,
            ..
        } => analysis::handle_compare(ctx, player, against, *games, out),

        Commands::Project {
            player,
            games,
            opponent,
            ..
        } => analysis::handle_project(ctx, player, *games, opponent.as_ref(), out),
    }
}
