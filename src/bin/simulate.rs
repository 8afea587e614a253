//! EcoStabilizer Simulator CLI
//!
//! Runs one scenario and prints a summary, optionally followed by a
//! day-level CSV table.
//!
//! ## Usage
//! ```bash
//! cargo run --bin simulate --release -- --scenario healthy --days 180 --seed 42
//! cargo run --bin simulate --release -- --scenario shock --show-csv
//! ```

use clap::{Parser, ValueEnum};

use ecostabilizer_sim::config::{Scenario, SimConfig};
use ecostabilizer_sim::engine::run_simulation;
use ecostabilizer_sim::report;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScenarioArg {
    Healthy,
    #[value(name = "halt_primary")]
    HaltPrimary,
    Shock,
    Bull,
    Bear,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Healthy => Scenario::Healthy,
            ScenarioArg::HaltPrimary => Scenario::HaltPrimary,
            ScenarioArg::Shock => Scenario::Shock,
            ScenarioArg::Bull => Scenario::Bull,
            ScenarioArg::Bear => Scenario::Bear,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "simulate",
    about = "EcoStabilizer crypto-economic simulator (directional what-if tool)",
    version
)]
struct Args {
    /// Scenario preset.
    #[arg(long, value_enum, default_value_t = ScenarioArg::Healthy)]
    scenario: ScenarioArg,

    /// Number of simulated days.
    #[arg(long, default_value_t = 180)]
    days: usize,

    /// Deterministic seed. Omit for a non-reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the day-level CSV table after the summary.
    #[arg(long)]
    show_csv: bool,

    /// Initial primary (EcoAsset) price in USDC.
    #[arg(long)]
    initial_primary: Option<f64>,

    /// Primary market price floor in USDC.
    #[arg(long)]
    primary_floor: Option<f64>,

    /// Initial SCC price in USDC.
    #[arg(long)]
    initial_scc: Option<f64>,

    /// Max arbitrage assets per day.
    #[arg(long)]
    arbitrage_capacity: Option<u64>,

    /// New EcoAssets available per day.
    #[arg(long)]
    primary_supply: Option<u64>,

    /// Withdrawal responsiveness (0..1).
    #[arg(long)]
    withdraw_sensitivity: Option<f64>,

    /// Max withdrawal fraction per day (0..1).
    #[arg(long)]
    withdraw_max_rate: Option<f64>,

    /// SCC market depth (SCC units).
    #[arg(long)]
    market_depth: Option<f64>,

    /// Linear impact coefficient.
    #[arg(long)]
    impact: Option<f64>,
}

impl Args {
    fn into_config(self) -> SimConfig {
        let mut cfg = SimConfig {
            days: self.days,
            seed: self.seed,
            scenario: self.scenario.into(),
            ..SimConfig::default()
        };

        if let Some(v) = self.initial_primary {
            cfg.initial_primary_price = v;
        }
        if let Some(v) = self.primary_floor {
            cfg.primary_price_floor = v;
        }
        if let Some(v) = self.initial_scc {
            cfg.initial_scc_price = v;
        }
        if let Some(v) = self.arbitrage_capacity {
            cfg.arbitrage_capacity_per_day = v;
        }
        if let Some(v) = self.primary_supply {
            cfg.primary_supply_per_day = v;
        }
        if let Some(v) = self.withdraw_sensitivity {
            cfg.withdrawal_sensitivity = v;
        }
        if let Some(v) = self.withdraw_max_rate {
            cfg.withdrawal_max_rate_pct_per_day = v;
        }
        if let Some(v) = self.market_depth {
            cfg.scc_market_depth = v;
        }
        if let Some(v) = self.impact {
            cfg.scc_impact_coefficient = v;
        }

        cfg.sanitize()
    }
}

fn main() {
    let args = Args::parse();
    let show_csv = args.show_csv;
    let cfg = args.into_config();

    let run = run_simulation(&cfg);

    report::print_summary(&run);
    if show_csv {
        report::print_csv(&run.records);
    }
}
