use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use chaos_game::{DEFAULT_ITERATION_COUNT, GuiConfig, RunGuiCommand, parse_iteration_count};

/// Animates the chaos game in a window. Esc cancels, R starts over.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "chaos_game_gui")]
struct Cli {
    /// Number of chaos-game iterations (a positive whole number)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_ITERATION_COUNT,
        value_parser = parse_iteration_count
    )]
    points: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between two points in milliseconds
    #[arg(long, default_value = "5")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Cli::parse();
    let command = RunGuiCommand::new(GuiConfig {
        iterations: args.points,
        seed: args.seed,
        step_delay: Duration::from_millis(args.delay_ms),
        ..GuiConfig::default()
    });

    command.execute()?;

    Ok(())
}
