// Structured Simulation Report Types
// Serializable output for console rendering or downstream JSON analysis

use crate::types::{MicroUsdc, TrajectoryStep};
use serde::Serialize;

// ─── Statistics (across Monte Carlo runs) ───────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Regime Usage ───────────────────────────────────────────────────────────

/// Observed selection share of one regime versus its declared probability.
#[derive(Debug, Clone, Serialize)]
pub struct RegimeUsage {
    pub regime: String,
    pub declared_pct: f64,
    pub observed_pct: f64,
    pub selections: u64,
}

// ─── Simulation Report ──────────────────────────────────────────────────────

/// Full output of one simulation invocation: inputs echoed back, closed-form
/// expectation, Monte Carlo estimate, regime histogram, sample trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub activity_level: String,
    pub starting_price: MicroUsdc,
    pub trades: u32,
    pub runs: u32,
    pub seed: u64,

    /// Closed-form expected per-trade change, percent
    pub expected_change_per_trade_pct: f64,
    /// Closed-form expected final price, USDC
    pub expected_final_price: f64,
    /// Distribution of Monte Carlo final prices, USDC
    pub simulated_final_price: Stats,
    /// Simulated mean vs closed form, percent ((sim - expected) / expected)
    pub drift_pct: f64,

    pub regime_breakdown: Vec<RegimeUsage>,
    pub sample_trajectory: Vec<TrajectoryStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_samples() {
        let stats = Stats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.n, 5);
        // Sample std dev of 1..5 is sqrt(2.5)
        assert!((stats.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
        assert!(stats.ci_lower < stats.mean && stats.mean < stats.ci_upper);
    }

    #[test]
    fn test_stats_empty() {
        let stats = Stats::from_samples(&[]);
        assert_eq!(stats.n, 0);
        assert_eq!(stats.mean, 0.0);
    }
}
