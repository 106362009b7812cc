use anyhow::Context;

use domino_sim::constants::DEFAULT_SEED;
use domino_sim::{run_demo, DemoConfig};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed = match std::env::var("DOMINO_SEED") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("DOMINO_SEED={raw:?} is not an unsigned integer"))?,
        Err(_) => DEFAULT_SEED,
    };

    let config = DemoConfig {
        seed,
        ..DemoConfig::default()
    };
    let report = run_demo(&config).context("domino demo failed")?;

    log::info!(
        "{} of {} dominoes fell after {:.2}s simulated ({:?} wall clock)",
        report.toppled,
        report.placed,
        report.simulated_seconds,
        report.wall_clock
    );
    Ok(())
}
