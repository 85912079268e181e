#[cfg(test)]
mod tests {
    use regime_sim::{catalog, expectation, simulation, MicroUsdc, SimConfig};

    fn normal_report(trades: u32, runs: u32, seed: u64) -> regime_sim::SimulationReport {
        let levels = catalog::builtin();
        let level = catalog::find(&levels, "normal").unwrap();
        let config = SimConfig::new(MicroUsdc(2_000_000), trades, runs, seed).unwrap();
        simulation::run(&config, level)
    }

    // ========== Monte Carlo Convergence ==========

    #[test]
    fn test_monte_carlo_mean_tracks_closed_form() {
        // 10,000 runs x 50 trades: law of large numbers puts the simulated
        // mean within ±5% of the compounded expectation
        let report = normal_report(50, 10_000, 0);
        let expected = report.expected_final_price;
        let simulated = report.simulated_final_price.mean;
        let rel = (simulated - expected).abs() / expected;
        assert!(
            rel < 0.05,
            "simulated mean {:.6} deviates {:.2}% from expected {:.6}",
            simulated,
            rel * 100.0,
            expected
        );
    }

    #[test]
    fn test_regime_frequencies_match_declared_probabilities() {
        // 500,000 selections: observed share within ±2pp of declared weight
        let report = normal_report(50, 10_000, 0);
        for usage in &report.regime_breakdown {
            assert!(
                (usage.observed_pct - usage.declared_pct).abs() < 2.0,
                "regime '{}': observed {:.2}% vs declared {:.2}%",
                usage.regime,
                usage.observed_pct,
                usage.declared_pct
            );
        }
    }

    // ========== Closed-Form Expectation ==========

    #[test]
    fn test_zero_trades_expectation_is_starting_price() {
        let levels = catalog::builtin();
        let level = catalog::find(&levels, "normal").unwrap();
        let price = expectation::expected_final_price(MicroUsdc(2_000_000), 0, level);
        assert_eq!(price, 2.0);
    }

    // ========== Positivity ==========

    #[test]
    fn test_prices_stay_strictly_positive() {
        // Every built-in regime has min change > -100%, so no trajectory can
        // touch zero even in the worst run
        let levels = catalog::builtin();
        for level in &levels {
            let config = SimConfig::new(MicroUsdc(2_000_000), 50, 2_000, 1).unwrap();
            let report = simulation::run(&config, level);
            assert!(
                report.simulated_final_price.min > 0.0,
                "level '{}' produced a non-positive final price: {}",
                level.name(),
                report.simulated_final_price.min
            );
        }
    }

    // ========== Trajectory Shape ==========

    #[test]
    fn test_sample_trajectory_shape() {
        let report = normal_report(50, 100, 3);
        assert_eq!(report.sample_trajectory.len(), 10);

        let levels = catalog::builtin();
        let level = catalog::find(&levels, "normal").unwrap();
        let names: Vec<&str> = level.regimes().iter().map(|r| r.name.as_str()).collect();
        for (i, step) in report.sample_trajectory.iter().enumerate() {
            assert_eq!(step.trade, i as u32 + 1);
            assert!(step.price > 0.0);
            assert!(
                names.contains(&step.regime.as_str()),
                "trajectory regime '{}' not in declared set",
                step.regime
            );
        }
    }

    // ========== Determinism & Output ==========

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = normal_report(50, 500, 42);
        let b = normal_report(50, 500, 42);
        assert_eq!(a.simulated_final_price.mean, b.simulated_final_price.mean);
        assert_eq!(a.drift_pct, b.drift_pct);

        let c = normal_report(50, 500, 43);
        assert_ne!(
            a.simulated_final_price.mean, c.simulated_final_price.mean,
            "different seeds should produce different draws"
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = normal_report(10, 50, 0);
        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["activity_level"], "normal");
        assert_eq!(value["trades"], 10);
        assert_eq!(value["regime_breakdown"].as_array().unwrap().len(), 5);
        assert_eq!(value["sample_trajectory"].as_array().unwrap().len(), 10);
    }
}
