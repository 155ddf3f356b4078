//! Entry point: parse CLI, load data and dispatch to command handlers.

use clap::Parser;
use hoops_fantasy::{
    cli::Cli,
    commands::{self, CommandContext},
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info,hoops_fantasy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let app = Cli::parse();
    let common = app.command.common();
    init_logging(common.verbose);

    let ctx = CommandContext::load(common)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&ctx, &app.command, &mut out)?;

    Ok(())
}
