// Bonding-Curve Regime Simulator - Type Definitions
// Regimes, activity levels, price units, and configuration validation

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Configuration Errors ───────────────────────────────────────────────────

/// Errors raised when a regime catalog or simulation config is malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("activity level '{0}' declares no regimes")]
    EmptyRegimeList(String),

    #[error("activity level '{level}': regime probabilities sum to {sum}%, expected 100% (±{epsilon})")]
    ProbabilityMass { level: String, sum: f64, epsilon: f64 },

    #[error("regime '{regime}': probability {probability}% is negative")]
    NegativeProbability { regime: String, probability: f64 },

    #[error("regime '{regime}': min change {min}% exceeds max change {max}%")]
    InvertedRange { regime: String, min: f64, max: f64 },

    #[error("regime '{regime}': min change {min}% wipes out the price (must be > -100%)")]
    RuinousRange { regime: String, min: f64 },

    #[error("unknown activity level '{name}' (known levels: {known})")]
    UnknownLevel { name: String, known: String },

    #[error("starting price must be positive")]
    ZeroPrice,

    #[error("trade count must be positive")]
    ZeroTrades,

    #[error("run count must be positive")]
    ZeroRuns,

    #[error("failed to read regime catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse regime catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Tolerance on the 100% probability-mass check.
pub const PROBABILITY_EPSILON: f64 = 1e-6;

// ─── MicroUsdc ──────────────────────────────────────────────────────────────

/// Price in USDC smallest units (6 decimals), matching on-chain representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MicroUsdc(pub u64);

impl MicroUsdc {
    /// Smallest units per whole USDC (10^6)
    pub const SCALE: u64 = 1_000_000;

    pub fn from_usdc(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as u64)
    }

    pub fn as_usdc(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for MicroUsdc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.6}", self.as_usdc())
    }
}

// ─── Regime ─────────────────────────────────────────────────────────────────

/// A named price-change bucket: selected with `probability`% weight, it applies
/// a uniform percentage change drawn from `[min_change_pct, max_change_pct]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regime {
    pub name: String,
    /// Selection weight in percent. Weights of one activity level sum to 100.
    pub probability: f64,
    /// Inclusive lower bound of the per-trade change, in percent (may be negative).
    pub min_change_pct: f64,
    /// Inclusive upper bound of the per-trade change, in percent.
    pub max_change_pct: f64,
}

impl Regime {
    pub fn new(name: &str, probability: f64, min_change_pct: f64, max_change_pct: f64) -> Self {
        Self {
            name: name.to_string(),
            probability,
            min_change_pct,
            max_change_pct,
        }
    }

    /// Midpoint return of the uniform change range, in percent.
    pub fn midpoint_pct(&self) -> f64 {
        (self.min_change_pct + self.max_change_pct) / 2.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.probability < 0.0 {
            return Err(ConfigError::NegativeProbability {
                regime: self.name.clone(),
                probability: self.probability,
            });
        }
        if self.min_change_pct > self.max_change_pct {
            return Err(ConfigError::InvertedRange {
                regime: self.name.clone(),
                min: self.min_change_pct,
                max: self.max_change_pct,
            });
        }
        if self.min_change_pct <= -100.0 {
            return Err(ConfigError::RuinousRange {
                regime: self.name.clone(),
                min: self.min_change_pct,
            });
        }
        Ok(())
    }
}

// ─── ActivityLevel ──────────────────────────────────────────────────────────

/// Largest cumulative draw value. Draws are uniform in `[0, CUMULATIVE_SENTINEL)`.
pub const CUMULATIVE_SENTINEL: f64 = 100.0;

/// A named, validated set of regimes partitioning the 0-100% probability space.
///
/// Validation happens once at construction; the cumulative-probability table is
/// pinned to exactly [`CUMULATIVE_SENTINEL`] at its last entry so that every
/// draw in `[0, 100)` lands inside some regime band regardless of summation
/// drift. Selection is first-match-wins in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLevel {
    name: String,
    regimes: Vec<Regime>,
    #[serde(skip)]
    cumulative: Vec<f64>,
}

impl ActivityLevel {
    pub fn new(name: &str, regimes: Vec<Regime>) -> Result<Self, ConfigError> {
        if regimes.is_empty() {
            return Err(ConfigError::EmptyRegimeList(name.to_string()));
        }
        for regime in &regimes {
            regime.validate()?;
        }
        let sum: f64 = regimes.iter().map(|r| r.probability).sum();
        if (sum - 100.0).abs() > PROBABILITY_EPSILON {
            return Err(ConfigError::ProbabilityMass {
                level: name.to_string(),
                sum,
                epsilon: PROBABILITY_EPSILON,
            });
        }

        let mut cumulative = Vec::with_capacity(regimes.len());
        let mut acc = 0.0;
        for regime in &regimes {
            acc += regime.probability;
            cumulative.push(acc);
        }
        // Pin the last band to the sentinel: the walk can never fall through.
        if let Some(last) = cumulative.last_mut() {
            *last = CUMULATIVE_SENTINEL;
        }

        Ok(Self {
            name: name.to_string(),
            regimes,
            cumulative,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regimes(&self) -> &[Regime] {
        &self.regimes
    }

    /// Select the regime whose cumulative band contains `draw`.
    ///
    /// `draw` must lie in `[0, 100)`. First regime whose cumulative upper bound
    /// exceeds the draw wins, so boundary draws resolve to the earlier regime's
    /// successor band start. Returns the regime index plus the regime.
    pub fn select(&self, draw: f64) -> (usize, &Regime) {
        for (idx, bound) in self.cumulative.iter().enumerate() {
            if draw < *bound {
                return (idx, &self.regimes[idx]);
            }
        }
        // Unreachable for draws in [0, 100): the last bound is the sentinel.
        let last = self.regimes.len() - 1;
        (last, &self.regimes[last])
    }

    /// Cumulative upper bounds, one per regime (last entry is the sentinel).
    pub fn cumulative_bounds(&self) -> &[f64] {
        &self.cumulative
    }
}

// ─── TrajectoryStep ─────────────────────────────────────────────────────────

/// One step of an illustrative sample trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryStep {
    /// 1-based trade index
    pub trade: u32,
    /// Price after applying this step's change, in USDC
    pub price: f64,
    /// Name of the regime selected on this step
    pub regime: String,
    /// Percentage change applied on this step
    pub change_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_regimes() -> Vec<Regime> {
        vec![
            Regime::new("up", 60.0, 0.0, 10.0),
            Regime::new("down", 40.0, -10.0, 0.0),
        ]
    }

    #[test]
    fn test_valid_level_builds_cumulative_table() {
        let level = ActivityLevel::new("test", two_regimes()).unwrap();
        assert_eq!(level.cumulative_bounds(), &[60.0, 100.0]);
    }

    #[test]
    fn test_sentinel_pins_last_band() {
        // Weights with float drift: 3 x 33.333333 + 0.000001 = 100 within epsilon
        let regimes = vec![
            Regime::new("a", 33.333333, -1.0, 1.0),
            Regime::new("b", 33.333333, -1.0, 1.0),
            Regime::new("c", 33.333334, -1.0, 1.0),
        ];
        let level = ActivityLevel::new("thirds", regimes).unwrap();
        let bounds = level.cumulative_bounds();
        assert_eq!(*bounds.last().unwrap(), CUMULATIVE_SENTINEL);
        // A draw just under 100 still selects the last regime
        let (idx, regime) = level.select(99.999_999_9);
        assert_eq!(idx, 2);
        assert_eq!(regime.name, "c");
    }

    #[test]
    fn test_select_boundary_draws() {
        let level = ActivityLevel::new("test", two_regimes()).unwrap();
        assert_eq!(level.select(0.0).1.name, "up");
        assert_eq!(level.select(59.999).1.name, "up");
        // Exactly on the bound: first regime's band is [0, 60), so 60 -> "down"
        assert_eq!(level.select(60.0).1.name, "down");
    }

    #[test]
    fn test_probability_mass_rejected() {
        let regimes = vec![Regime::new("only", 90.0, -1.0, 1.0)];
        let err = ActivityLevel::new("short", regimes).unwrap_err();
        assert!(matches!(err, ConfigError::ProbabilityMass { .. }));
    }

    #[test]
    fn test_empty_level_rejected() {
        let err = ActivityLevel::new("empty", Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRegimeList(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let regimes = vec![Regime::new("bad", 100.0, 5.0, -5.0)];
        let err = ActivityLevel::new("inverted", regimes).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRange { .. }));
    }

    #[test]
    fn test_ruinous_range_rejected() {
        let regimes = vec![Regime::new("wipeout", 100.0, -100.0, 0.0)];
        let err = ActivityLevel::new("ruin", regimes).unwrap_err();
        assert!(matches!(err, ConfigError::RuinousRange { .. }));
    }

    #[test]
    fn test_negative_probability_rejected() {
        let regimes = vec![
            Regime::new("neg", -10.0, -1.0, 1.0),
            Regime::new("rest", 110.0, -1.0, 1.0),
        ];
        let err = ActivityLevel::new("neg", regimes).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeProbability { .. }));
    }

    #[test]
    fn test_micro_usdc_conversion() {
        let price = MicroUsdc(2_000_000);
        assert_eq!(price.as_usdc(), 2.0);
        assert_eq!(MicroUsdc::from_usdc(2.0), price);
        assert_eq!(format!("{}", price), "$2.000000");
    }
}
