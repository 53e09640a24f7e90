use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use car_shuffle::config::Problem;
use car_shuffle::{logger, Solver};

/// Distribute people across vehicles.
#[derive(Debug, Parser)]
#[command(name = "car-shuffle", version)]
struct Cli {
    /// JSON file with `people`, `vehicles`, and optional `rules` and `config`
    problem: PathBuf,

    /// Seed for a reproducible assignment (overrides the file's config)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the assignment as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let text = std::fs::read_to_string(&cli.problem)
        .with_context(|| format!("failed to read {}", cli.problem.display()))?;
    let mut problem = Problem::from_json(&text)
        .with_context(|| format!("failed to parse {}", cli.problem.display()))?;
    let dropped = problem.prune();
    if dropped > 0 {
        tracing::warn!("dropped {} rules naming unknown people or vehicles", dropped);
    }
    if let Some(seed) = cli.seed {
        problem.config.seed = Some(seed);
    }
    for rule in &problem.rules {
        tracing::debug!("rule: {}", rule.describe(&problem.vehicles));
    }

    let solution = Solver::new(problem.config.clone())
        .solve(&problem.people, &problem.vehicles, &problem.rules)
        .context("no assignment")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution.assignment)?);
        return Ok(());
    }
    for vehicle in &problem.vehicles {
        let Some(bucket) = solution.assignment.get(&vehicle.id) else { continue };
        println!(
            "{} ({} / {} seats filled, {:.0}%)",
            vehicle.name,
            bucket.occupancy(),
            bucket.capacity,
            bucket.fill_percentage()
        );
        if bucket.people.is_empty() {
            println!("  (empty)");
        } else {
            println!("  {}", bucket.people.join(", "));
        }
    }
    Ok(())
}
