//! Simulation Configuration
//!
//! All tunable parameters for one simulator run, plus the scenario selector.
//! Defaults describe a modest, directionally-plausible market; they are not
//! calibrated to real data.

/// Primary-market price scenario. Closed set; unrecognized names fall back
/// to [`Scenario::Default`] rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Healthy,     // mild noise around a stable mean, small positive drift
    HaltPrimary, // demand halt: price decays toward the floor and stays there
    Shock,       // one-time -40% shock at ~1/3 of the run, slow recovery
    Bull,        // constant +0.5/day drift
    Bear,        // constant -0.5/day drift
    Default,     // generic walk using the configured drift and volatility
}

impl Scenario {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Healthy,
            Self::HaltPrimary,
            Self::Shock,
            Self::Bull,
            Self::Bear,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::HaltPrimary => "halt_primary",
            Self::Shock => "shock",
            Self::Bull => "bull",
            Self::Bear => "bear",
            Self::Default => "default",
        }
    }

    /// Soft parse: anything outside the known set maps to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "healthy" => Self::Healthy,
            "halt_primary" => Self::HaltPrimary,
            "shock" => Self::Shock,
            "bull" => Self::Bull,
            "bear" => Self::Bear,
            _ => Self::Default,
        }
    }
}

/// Immutable per-run configuration. Build one, [`sanitize`](Self::sanitize)
/// it, and hand it to [`run_simulation`](crate::engine::run_simulation).
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub days: usize,
    pub seed: Option<u64>,
    pub scenario: Scenario,

    // Primary market (EcoAsset) dynamics
    pub initial_primary_price: f64,
    pub primary_price_floor: f64,
    pub primary_daily_drift: f64,
    pub primary_daily_vol: f64,
    pub primary_supply_per_day: u64, // new EcoAssets available per day

    // SCC market
    pub initial_scc_price: f64,
    pub scc_daily_vol_pct: f64,    // exogenous day-to-day pct move (stddev)
    pub scc_market_depth: f64,     // rough depth in SCC for linear impact
    pub scc_impact_coefficient: f64,

    // Vault / mechanism
    pub scc_per_asset: f64,
    pub arbitrage_spread_threshold_pct: f64, // premium over ceiling required to trigger
    pub arbitrage_capacity_per_day: u64,
    pub withdrawal_sensitivity: f64,         // responsiveness to value gap
    pub withdrawal_max_rate_pct_per_day: f64, // cap as fraction of active loans
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: 180,
            seed: None,
            scenario: Scenario::Healthy,

            initial_primary_price: 230.0,
            primary_price_floor: 40.0,
            primary_daily_drift: 0.0,
            primary_daily_vol: 2.0,
            primary_supply_per_day: 50,

            initial_scc_price: 10.0,
            scc_daily_vol_pct: 0.03,
            scc_market_depth: 50_000.0,
            scc_impact_coefficient: 1.0,

            scc_per_asset: 20.0,
            arbitrage_spread_threshold_pct: 0.01,
            arbitrage_capacity_per_day: 200,
            withdrawal_sensitivity: 0.15,
            withdrawal_max_rate_pct_per_day: 0.10,
        }
    }
}

impl SimConfig {
    /// Clamp rate fields into [0, 1] and floor ratio fields at zero.
    /// Call once before running; the engine assumes sane inputs.
    pub fn sanitize(mut self) -> Self {
        self.scc_daily_vol_pct = clamp(self.scc_daily_vol_pct, 0.0, 1.0);
        self.arbitrage_spread_threshold_pct =
            clamp(self.arbitrage_spread_threshold_pct, 0.0, 1.0);
        self.withdrawal_sensitivity = clamp(self.withdrawal_sensitivity, 0.0, 1.0);
        self.withdrawal_max_rate_pct_per_day =
            clamp(self.withdrawal_max_rate_pct_per_day, 0.0, 1.0);
        self.scc_per_asset = self.scc_per_asset.max(0.0);
        self.scc_market_depth = self.scc_market_depth.max(0.0);
        self
    }
}

pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
