// Monte Carlo Trajectory Simulator - seedable PRNG, i.i.d. regime sampling
// N independent runs x T trades each; aggregate mean, histogram, sample path

use crate::expectation::{expected_change_per_trade, expected_final_price};
use crate::report::{RegimeUsage, SimulationReport, Stats};
use crate::types::{ActivityLevel, ConfigError, MicroUsdc, Regime, CUMULATIVE_SENTINEL};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default number of independent Monte Carlo runs per invocation.
pub const DEFAULT_RUNS: u32 = 10_000;

/// Maximum number of steps recorded in the illustrative sample trajectory.
pub const SAMPLE_TRAJECTORY_MAX: u32 = 10;

// ─── Configuration ──────────────────────────────────────────────────────────

/// Validated inputs for one simulation invocation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub starting_price: MicroUsdc,
    pub trades: u32,
    pub runs: u32,
    pub seed: u64,
}

impl SimConfig {
    pub fn new(
        starting_price: MicroUsdc,
        trades: u32,
        runs: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if starting_price.is_zero() {
            return Err(ConfigError::ZeroPrice);
        }
        if trades == 0 {
            return Err(ConfigError::ZeroTrades);
        }
        if runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        Ok(Self { starting_price, trades, runs, seed })
    }
}

// ─── Simulation ─────────────────────────────────────────────────────────────

/// Draw one per-trade change for `regime`, in percent, inclusive of bounds.
fn draw_change(rng: &mut ChaCha8Rng, regime: &Regime) -> f64 {
    if regime.min_change_pct == regime.max_change_pct {
        return regime.min_change_pct;
    }
    rng.gen_range(regime.min_change_pct..=regime.max_change_pct)
}

/// Advance `price` by one sampled trade; returns the selected regime index
/// and the applied change.
fn step(rng: &mut ChaCha8Rng, level: &ActivityLevel, price: &mut f64) -> (usize, f64) {
    let draw = rng.gen_range(0.0..CUMULATIVE_SENTINEL);
    let (idx, regime) = level.select(draw);
    let change = draw_change(rng, regime);
    *price *= 1.0 + change / 100.0;
    (idx, change)
}

/// Run the full simulation: closed-form expectation, `runs` Monte Carlo
/// trajectories of `trades` steps each, and a fresh sample trajectory of up
/// to [`SAMPLE_TRAJECTORY_MAX`] steps.
///
/// Deterministic for a given `(config, level)` pair: all draws come from a
/// single ChaCha8 stream seeded with `config.seed`.
pub fn run(config: &SimConfig, level: &ActivityLevel) -> SimulationReport {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let start = config.starting_price.as_usdc();

    let mut final_prices = Vec::with_capacity(config.runs as usize);
    let mut selections = vec![0u64; level.regimes().len()];

    for _ in 0..config.runs {
        let mut price = start;
        for _ in 0..config.trades {
            let (idx, _) = step(&mut rng, level, &mut price);
            selections[idx] += 1;
        }
        final_prices.push(price);
    }

    // Illustrative path from fresh draws, not reused from the aggregate runs
    let sample_len = config.trades.min(SAMPLE_TRAJECTORY_MAX);
    let mut sample_trajectory = Vec::with_capacity(sample_len as usize);
    let mut price = start;
    for trade in 1..=sample_len {
        let (idx, change) = step(&mut rng, level, &mut price);
        sample_trajectory.push(crate::types::TrajectoryStep {
            trade,
            price,
            regime: level.regimes()[idx].name.clone(),
            change_pct: change,
        });
    }

    let total_selections = config.trades as u64 * config.runs as u64;
    let regime_breakdown = level
        .regimes()
        .iter()
        .zip(&selections)
        .map(|(regime, &count)| RegimeUsage {
            regime: regime.name.clone(),
            declared_pct: regime.probability,
            observed_pct: count as f64 / total_selections as f64 * 100.0,
            selections: count,
        })
        .collect();

    let expected = expected_final_price(config.starting_price, config.trades, level);
    let simulated = Stats::from_samples(&final_prices);
    let drift_pct = (simulated.mean - expected) / expected * 100.0;

    SimulationReport {
        activity_level: level.name().to_string(),
        starting_price: config.starting_price,
        trades: config.trades,
        runs: config.runs,
        seed: config.seed,
        expected_change_per_trade_pct: expected_change_per_trade(level),
        expected_final_price: expected,
        simulated_final_price: simulated,
        drift_pct,
        regime_breakdown,
        sample_trajectory,
    }
}
