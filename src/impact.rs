//! Linear Market Impact
//!
//! Linearized price impact: dP/P ~ impact_coeff * (net_flow / depth).
//! Positive net flow is buy pressure (price up), negative is sell pressure.

use crate::config::clamp;

/// Single-day repricing cap. Keeps one day's mechanism flow from moving the
/// SCC price by more than +/-30%.
pub const MAX_PCT_CHANGE: f64 = 0.3;

/// Hard price floor used everywhere the SCC price is updated; guards the
/// divisions downstream.
pub const MIN_PRICE: f64 = 0.01;

/// Apply net-flow price impact. Degenerate depth (<= 0) leaves the price
/// unchanged.
pub fn apply_linear_price_impact(
    price: f64,
    net_flow: f64,
    depth: f64,
    impact_coeff: f64,
) -> f64 {
    if depth <= 0.0 {
        return price;
    }
    let pct_change = clamp(impact_coeff * (net_flow / depth), -MAX_PCT_CHANGE, MAX_PCT_CHANGE);
    (price * (1.0 + pct_change)).max(MIN_PRICE)
}
