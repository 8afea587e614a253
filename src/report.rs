//! Run Reporting
//!
//! Human-readable summary and optional day-level CSV. Pure formatting; the
//! engine never reads anything back from here.

use crate::engine::{DayRecord, SimulationRun};

pub fn avg_premium_pct(records: &[DayRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records
        .iter()
        .map(|r| r.premium_over_ceiling_pct)
        .sum::<f64>()
        / records.len() as f64
}

pub fn print_summary(run: &SimulationRun) {
    let cfg = &run.config;
    let st = &run.state;
    let Some(last) = run.records.last() else {
        println!("No days simulated.");
        return;
    };

    println!();
    println!("Simulation Summary");
    println!("===================");
    println!("Scenario:                 {}", cfg.scenario.name());
    println!("Days:                     {}", cfg.days);
    println!("Final Primary Price:      {:.2} USDC", last.primary_price);
    println!("Final SCC Price:          {:.2} USDC", last.scc_price);
    println!(
        "Final Ceiling:            {:.2} USDC (primary/{:.0})",
        last.ceiling, cfg.scc_per_asset
    );
    println!("Arbitrage Days:           {}", st.arbitrage_days);
    println!(
        "Max Premium Over Ceiling: {:.2}%",
        st.max_premium_over_ceiling_pct
    );
    println!(
        "Avg Premium Over Ceiling: {:.2}%",
        avg_premium_pct(&run.records)
    );
    println!("Active Loans (final):     {}", last.active_loans);
    println!("Total Deposits:           {}", st.total_deposits);
    println!("Total Withdrawals:        {}", st.total_withdrawals);
    println!("SCC Circulating:          {:.2}", last.scc_circulating);
    println!("SCC Liability:            {:.2}", last.scc_liability);
    println!("Supply Gap (circ-liab):   {:.2}", last.scc_supply_gap);
}

pub const CSV_HEADER: &str = "day,primary_price,scc_price,ceiling,premium_over_ceiling_pct,\
active_loans,deposits_today,withdrawals_today,scc_circulating,scc_liability,\
scc_supply_gap,net_flow_scc";

pub fn csv_row(r: &DayRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}",
        r.day,
        r.primary_price,
        r.scc_price,
        r.ceiling,
        r.premium_over_ceiling_pct,
        r.active_loans,
        r.deposits_today,
        r.withdrawals_today,
        r.scc_circulating,
        r.scc_liability,
        r.scc_supply_gap,
        r.net_flow_scc,
    )
}

pub fn print_csv(records: &[DayRecord]) {
    println!();
    println!("CSV (day-level)");
    println!("{CSV_HEADER}");
    for r in records {
        println!("{}", csv_row(r));
    }
}
