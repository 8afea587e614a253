//! EcoStabilizer Economic Simulator
//!
//! Discrete-time, day-stepped model of the EcoStabilizer mechanism:
//! EcoAssets are deposited into a vault to mint SCC at a fixed ratio, with
//! arbitrage and withdrawal feedback loops and a linear market-impact model
//! for the SCC price.
//!
//! ## Modules
//!
//! - `config`: run parameters + scenario selector
//! - `state`: vault ledger mutated once per day
//! - `price_path`: per-scenario primary price generators
//! - `impact`: linear net-flow price impact
//! - `engine`: per-day transition and driver loop
//! - `report`: summary / CSV rendering
//!
//! ## Usage
//!
//! ```bash
//! # Single scenario run
//! cargo run --bin simulate --release -- --scenario healthy --days 180 --seed 42
//!
//! # Cross-scenario comparison table
//! cargo run --bin compare --release -- --days 180 --seed 42
//! ```
//!
//! This is a directional what-if tool, not a prediction engine: per-day
//! adjustments are aggregate and closed-form, not agent-level.

pub mod config;
pub mod engine;
pub mod impact;
pub mod price_path;
pub mod report;
pub mod state;
