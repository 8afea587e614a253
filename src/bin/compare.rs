//! Cross-Scenario Comparison Binary
//!
//! Runs every scenario preset under a shared seed and prints a comparison
//! table of the end-of-run mechanism health figures.
//!
//! ## Usage
//! ```bash
//! cargo run --bin compare --release -- --days 180 --seed 42
//! ```

use clap::Parser;

use ecostabilizer_sim::config::{Scenario, SimConfig};
use ecostabilizer_sim::engine::run_simulation;
use ecostabilizer_sim::report::avg_premium_pct;

#[derive(Debug, Parser)]
#[command(
    name = "compare",
    about = "Run all EcoStabilizer scenarios and compare outcomes",
    version
)]
struct Args {
    /// Number of simulated days per scenario.
    #[arg(long, default_value_t = 180)]
    days: usize,

    /// Shared deterministic seed. Omit for non-reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    println!("=======================================================");
    println!("  EcoStabilizer Scenario Comparison");
    println!("=======================================================");
    println!();
    println!(
        "Parameters: days={}, seed={}",
        args.days,
        args.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!();

    println!("| Scenario     | Primary | SCC    | Arb Days | Avg Prem | Loans  | Gap      |");
    println!("|--------------|---------|--------|----------|----------|--------|----------|");

    for scenario in Scenario::all() {
        let cfg = SimConfig {
            scenario,
            days: args.days,
            seed: args.seed,
            ..SimConfig::default()
        };
        let run = run_simulation(&cfg);
        let Some(last) = run.records.last() else {
            continue;
        };

        println!(
            "| {:12} | {:7.2} | {:6.2} | {:8} | {:7.2}% | {:6} | {:8.1} |",
            scenario.name(),
            last.primary_price,
            last.scc_price,
            run.state.arbitrage_days,
            avg_premium_pct(&run.records),
            last.active_loans,
            last.scc_supply_gap,
        );
    }
}
