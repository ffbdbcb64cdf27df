use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use d20_cli::ui::output::{print_banner, print_farewell};
use d20_cli::ui::tui_app::TuiApp;
use d20_core::ConfettiConfig;

#[derive(Parser, Debug)]
#[command(name = "d20")]
#[command(about = "Roll a d20 for today's motivation", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// How long confetti keeps raining, in milliseconds
    #[arg(long, default_value_t = 3000)]
    duration_ms: u64,

    /// How long the fade to transparent takes, in milliseconds
    #[arg(long, default_value_t = 1000)]
    fade_ms: u64,

    /// Number of confetti particles per trigger
    #[arg(long, default_value_t = 30)]
    particles: usize,

    /// Don't read or write the lifetime roll counter on disk
    #[arg(long)]
    no_stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("D20_DEBUG", "1");
    }
    init_logging(cli.debug);

    print_banner()?;

    let config = ConfettiConfig {
        particle_count: cli.particles,
        rain: Duration::from_millis(cli.duration_ms),
        fade: Duration::from_millis(cli.fade_ms),
        ..Default::default()
    };

    let mut tui = TuiApp::new(config, !cli.no_stats)?;
    let result = tui.run().await;
    let (stats, session_rolls) = tui.summary();
    // Leave the alternate screen before printing the summary.
    drop(tui);

    result?;
    print_farewell(&stats, session_rolls)?;
    Ok(())
}

fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug { "d20=debug" } else { "d20=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
