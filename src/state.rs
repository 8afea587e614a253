//! Vault Ledger State
//!
//! One `SimState` per run, owned and mutated exclusively by the engine's
//! per-day transition. Everything else reads snapshots (`DayRecord`).

use crate::config::SimConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub day: usize,
    pub primary_price: f64,
    pub scc_price: f64,

    pub active_loans: u64,
    pub total_deposits: u64,
    pub total_withdrawals: u64,

    pub total_scc_minted: f64,
    pub total_scc_burned: f64,

    // Tracking
    pub arbitrage_days: usize,
    pub max_premium_over_ceiling_pct: f64,
}

impl SimState {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            day: 0,
            primary_price: cfg.initial_primary_price,
            scc_price: cfg.initial_scc_price,
            active_loans: 0,
            total_deposits: 0,
            total_withdrawals: 0,
            total_scc_minted: 0.0,
            total_scc_burned: 0.0,
            arbitrage_days: 0,
            max_premium_over_ceiling_pct: 0.0,
        }
    }

    pub fn scc_circulating(&self) -> f64 {
        self.total_scc_minted - self.total_scc_burned
    }

    pub fn scc_liability(&self, cfg: &SimConfig) -> f64 {
        cfg.scc_per_asset * self.active_loans as f64
    }

    /// Positive if more SCC circulates than outstanding loan liability.
    pub fn supply_gap(&self, cfg: &SimConfig) -> f64 {
        self.scc_circulating() - self.scc_liability(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_initial_prices() {
        let cfg = SimConfig::default();
        let st = SimState::new(&cfg);

        assert_eq!(st.day, 0);
        assert_eq!(st.primary_price, cfg.initial_primary_price);
        assert_eq!(st.scc_price, cfg.initial_scc_price);
        assert_eq!(st.active_loans, 0);
        assert_eq!(st.supply_gap(&cfg), 0.0);
    }

    #[test]
    fn test_derived_quantities() {
        let cfg = SimConfig::default();
        let mut st = SimState::new(&cfg);
        st.active_loans = 10;
        st.total_scc_minted = 300.0;
        st.total_scc_burned = 100.0;

        assert_eq!(st.scc_circulating(), 200.0);
        assert_eq!(st.scc_liability(&cfg), 200.0);
        assert_eq!(st.supply_gap(&cfg), 0.0);
    }
}
