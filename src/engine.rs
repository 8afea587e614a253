//! Simulation Engine
//!
//! The per-day state transition and the driver loop. Step order is
//! load-bearing:
//! 1. Primary market price update
//! 2. Exogenous SCC move (random walk)
//! 3. Arbitrage ceiling check (mint-and-sell when SCC trades over ceiling)
//! 4. Withdrawal check (buy-and-burn when collateral value exceeds debt)
//! 5. Net-flow price impact, applied once for the whole day
//! 6. Day record emission
//!
//! All divisions are guarded; a run is a one-shot pure computation with no
//! failure or rollback concept.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{clamp, SimConfig};
use crate::impact::{apply_linear_price_impact, MIN_PRICE};
use crate::price_path::{gauss, PricePath};
use crate::state::SimState;

/// Immutable end-of-day snapshot, appended once per day. Reporting reads
/// these; the engine never does.
#[derive(Clone, Debug, PartialEq)]
pub struct DayRecord {
    pub day: usize,
    pub primary_price: f64,
    pub scc_price: f64,
    pub ceiling: f64,
    pub premium_over_ceiling_pct: f64,
    pub active_loans: u64,
    pub deposits_today: u64,
    pub withdrawals_today: u64,
    pub scc_circulating: f64,
    pub scc_liability: f64,
    pub scc_supply_gap: f64,
    pub net_flow_scc: f64,
}

/// Everything a run produces: the configuration it ran under, the final
/// ledger state, and the ordered day-by-day audit trail.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub config: SimConfig,
    pub state: SimState,
    pub records: Vec<DayRecord>,
}

/// Advance the ledger by one day and return the day's record.
pub fn step_day(
    cfg: &SimConfig,
    path: &PricePath,
    st: &mut SimState,
    rng: &mut impl Rng,
) -> DayRecord {
    let day = st.day + 1;
    st.day = day;

    // 1) Primary market price update
    st.primary_price = path.next(day, st.primary_price, rng);

    // 2) Exogenous SCC move (random walk)
    let exo_move = gauss(rng, cfg.scc_daily_vol_pct);
    st.scc_price = (st.scc_price * (1.0 + exo_move)).max(MIN_PRICE);

    // 3) Arbitrage ceiling check
    let ceiling = st.primary_price / cfg.scc_per_asset;
    let premium = if ceiling > 0.0 {
        st.scc_price / ceiling - 1.0
    } else {
        0.0
    };
    let premium_over_ceiling_pct = if premium > 0.0 { 100.0 * premium } else { 0.0 };
    st.max_premium_over_ceiling_pct =
        st.max_premium_over_ceiling_pct.max(premium_over_ceiling_pct);

    let mut arbitrage_assets = 0u64;
    let mut net_flow_scc = 0.0; // positive = buy SCC, negative = sell SCC

    if premium > cfg.arbitrage_spread_threshold_pct {
        st.arbitrage_days += 1;
        // Bounded by vault capacity and by primary-market supply, whichever
        // binds first.
        arbitrage_assets = cfg
            .arbitrage_capacity_per_day
            .min(cfg.primary_supply_per_day);
        let minted = cfg.scc_per_asset * arbitrage_assets as f64;
        st.total_deposits += arbitrage_assets;
        st.active_loans += arbitrage_assets;
        st.total_scc_minted += minted;
        // Arbitrageurs sell the freshly minted SCC into the market.
        net_flow_scc -= minted;
    }

    // 4) Withdrawals: more likely when collateral is worth more than the
    //    SCC owed against it (cheap SCC).
    let value_ratio = if st.scc_price > 0.0 {
        st.primary_price / (cfg.scc_per_asset * st.scc_price)
    } else {
        0.0
    };
    let target_rate = cfg.withdrawal_sensitivity * (value_ratio - 1.0).max(0.0);
    let realized_rate = clamp(target_rate, 0.0, cfg.withdrawal_max_rate_pct_per_day);
    let potential_withdrawals = (st.active_loans as f64 * realized_rate).floor() as u64;

    let withdrawals = potential_withdrawals.min(st.active_loans);
    if withdrawals > 0 {
        let burned = cfg.scc_per_asset * withdrawals as f64;
        st.total_withdrawals += withdrawals;
        st.active_loans -= withdrawals;
        st.total_scc_burned += burned;
        // Withdrawing users buy SCC back to burn it.
        net_flow_scc += burned;
    }

    // 5) Fold the day's net mechanism flow into the SCC price, once.
    st.scc_price = apply_linear_price_impact(
        st.scc_price,
        net_flow_scc,
        cfg.scc_market_depth,
        cfg.scc_impact_coefficient,
    );

    // 6) Record
    DayRecord {
        day,
        primary_price: st.primary_price,
        scc_price: st.scc_price,
        ceiling,
        premium_over_ceiling_pct,
        active_loans: st.active_loans,
        deposits_today: arbitrage_assets,
        withdrawals_today: withdrawals,
        scc_circulating: st.scc_circulating(),
        scc_liability: st.scc_liability(cfg),
        scc_supply_gap: st.supply_gap(cfg),
        net_flow_scc,
    }
}

/// Run the full configured horizon with a run-scoped RNG. A supplied seed
/// makes the run reproducible bit-for-bit; omitting it draws the seed from
/// OS entropy.
pub fn run_simulation(cfg: &SimConfig) -> SimulationRun {
    let mut rng = match cfg.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_simulation_with_rng(cfg, &mut rng)
}

/// Same as [`run_simulation`] but with a caller-owned RNG, for harnesses
/// that manage their own seed schedule.
pub fn run_simulation_with_rng(cfg: &SimConfig, rng: &mut impl Rng) -> SimulationRun {
    let path = PricePath::new(cfg);
    let mut st = SimState::new(cfg);
    let mut records = Vec::with_capacity(cfg.days);

    for _ in 0..cfg.days {
        records.push(step_day(cfg, &path, &mut st, rng));
    }

    SimulationRun {
        config: cfg.clone(),
        state: st,
        records,
    }
}
