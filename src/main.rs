use anyhow::Result;
use clap::Parser;
use petri_core::config::AppConfig;
use petri_core::init_logging;
use petri_core::world::World;
use petri_lib::{runner, seeding};

#[derive(Parser, Debug)]
#[command(name = "petri", about = "Deterministic artificial-life world simulation")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Override the RNG seed from the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Override the target ticks per second (0 = unpaced)
    #[arg(long)]
    tps: Option<u32>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load_from(&args.config);
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(tps) = args.tps {
        config.target_tps = tps;
    }
    let target_tps = config.target_tps;

    let mut world = World::new(config)?;
    let placed = seeding::populate(&mut world)?;
    tracing::info!(
        population = placed,
        ticks = args.ticks,
        target_tps = target_tps,
        "Starting simulation"
    );

    let summary = runner::run_headless(&mut world, args.ticks, target_tps)?;
    tracing::info!(
        ticks = summary.ticks,
        population = summary.final_population,
        removed = summary.removed_total,
        inserted = summary.inserted_total,
        "Simulation finished"
    );
    world.metrics.log_summary();
    Ok(())
}
