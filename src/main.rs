use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use chaos_game::{
    DEFAULT_ITERATION_COUNT, PpmFilePresenter, RenderConfig, RenderToFileController, RunOutcome,
    parse_iteration_count,
};

/// Draws a Sierpinski triangle with the chaos game and writes it as a PPM image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "chaos_game")]
struct Cli {
    /// Number of chaos-game iterations (a positive whole number)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_ITERATION_COUNT,
        value_parser = parse_iteration_count
    )]
    points: u64,

    /// Seed for reproducible images; omitted means a fresh random run
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between two points in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Cancel the run after this many milliseconds and keep what was drawn
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Where to write the PPM image
    #[arg(short, long, default_value = "output/sierpinski.ppm")]
    output: PathBuf,

    /// Width and height of the square canvas in pixels
    #[arg(long, default_value = "700")]
    size: u32,
}

impl Cli {
    fn render_config(&self) -> Result<RenderConfig> {
        let config = RenderConfig {
            iterations: self.points,
            seed: self.seed,
            step_delay: Duration::from_millis(self.delay_ms),
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            output: self.output.clone(),
            ..RenderConfig::default()
        };

        config
            .with_canvas_size(self.size)
            .with_context(|| format!("cannot fit the triangle on a {0}x{0} canvas", self.size))
    }
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Cli::parse();
    let config = args.render_config()?;

    let mut controller = RenderToFileController::new(PpmFilePresenter::new());
    match controller.generate(&config)? {
        RunOutcome::Completed => info!(points = config.iterations + 1, "Generation complete"),
        RunOutcome::Cancelled => warn!("time limit reached, writing the partial image"),
        RunOutcome::NotStarted => warn!("nothing was generated"),
    }

    controller
        .write(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    Ok(())
}
