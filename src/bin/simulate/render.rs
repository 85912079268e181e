// Console rendering of a SimulationReport - aligned tables, human-readable

use regime_sim::SimulationReport;

pub fn print_report(report: &SimulationReport) {
    println!("\n  Regime Simulation v0.2.0");
    println!(
        "  PRNG: ChaCha8Rng | Activity: {} | Runs: {} | Seed: {}",
        report.activity_level, report.runs, report.seed
    );
    println!(
        "  Start: {} | Trades: {}\n",
        report.starting_price, report.trades
    );

    println!(
        "  Expected change/trade:  {:>+9.3}%",
        report.expected_change_per_trade_pct
    );
    println!(
        "  Expected final price:   ${:>12.6}",
        report.expected_final_price
    );
    let sim = &report.simulated_final_price;
    let ci = (sim.ci_upper - sim.ci_lower) / 2.0;
    println!(
        "  Simulated final price:  ${:>12.6} ±{:.6} (95% CI, n={})",
        sim.mean, ci, sim.n
    );
    println!(
        "  Range across runs:      ${:.6} .. ${:.6}",
        sim.min, sim.max
    );
    println!("  Drift vs closed form:   {:>+9.3}%\n", report.drift_pct);

    println!(
        "  {:<20} {:>10} {:>10} {:>12}",
        "Regime", "Declared", "Observed", "Selections"
    );
    println!("  {}", "-".repeat(56));
    for usage in &report.regime_breakdown {
        println!(
            "  {:<20} {:>9.2}% {:>9.2}% {:>12}",
            usage.regime, usage.declared_pct, usage.observed_pct, usage.selections
        );
    }

    println!("\n  Sample trajectory ({} steps):", report.sample_trajectory.len());
    println!(
        "  {:<7} {:>14} {:>10}  {}",
        "Trade", "Price", "Change", "Regime"
    );
    println!("  {}", "-".repeat(56));
    for step in &report.sample_trajectory {
        println!(
            "  {:<7} {:>14.6} {:>+9.2}%  {}",
            step.trade, step.price, step.change_pct, step.regime
        );
    }
    println!();
}
