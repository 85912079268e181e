// Built-in Activity-Level Catalog - low / normal / high trade intensity
// Plus JSON loading of user-supplied catalogs with construction-time validation

use crate::types::{ActivityLevel, ConfigError, Regime};
use serde::Deserialize;
use std::path::Path;

// ─── Built-in Levels ────────────────────────────────────────────────────────

fn level(name: &str, regimes: Vec<Regime>) -> ActivityLevel {
    // Built-in definitions are covered by tests; validation cannot fail here.
    ActivityLevel::new(name, regimes).expect("built-in catalog regimes are valid")
}

/// Quiet market: mostly consolidation, small moves either way.
fn low() -> ActivityLevel {
    level(
        "low",
        vec![
            Regime::new("consolidation", 60.0, -3.0, 3.0),
            Regime::new("mild_rally", 15.0, 3.0, 10.0),
            Regime::new("mild_correction", 15.0, -10.0, -3.0),
            Regime::new("strong_rally", 5.0, 10.0, 25.0),
            Regime::new("strong_correction", 5.0, -20.0, -10.0),
        ],
    )
}

/// Typical market: moderate two-sided flow with a slight upward drift.
fn normal() -> ActivityLevel {
    level(
        "normal",
        vec![
            Regime::new("consolidation", 40.0, -5.0, 5.0),
            Regime::new("mild_rally", 25.0, 5.0, 15.0),
            Regime::new("mild_correction", 20.0, -15.0, -5.0),
            Regime::new("strong_rally", 10.0, 15.0, 40.0),
            Regime::new("strong_correction", 5.0, -30.0, -15.0),
        ],
    )
}

/// Hot market: wide swings, occasional parabolic runs.
fn high() -> ActivityLevel {
    level(
        "high",
        vec![
            Regime::new("consolidation", 25.0, -8.0, 8.0),
            Regime::new("mild_rally", 22.0, 8.0, 20.0),
            Regime::new("mild_correction", 22.0, -20.0, -8.0),
            Regime::new("strong_rally", 14.0, 20.0, 50.0),
            Regime::new("strong_correction", 12.0, -40.0, -20.0),
            Regime::new("parabolic", 5.0, 50.0, 120.0),
        ],
    )
}

/// The fixed catalog shipped with the simulator.
pub fn builtin() -> Vec<ActivityLevel> {
    vec![low(), normal(), high()]
}

/// Look up a level by name (case-insensitive).
pub fn find<'a>(levels: &'a [ActivityLevel], name: &str) -> Result<&'a ActivityLevel, ConfigError> {
    let wanted = name.to_lowercase();
    levels
        .iter()
        .find(|l| l.name().to_lowercase() == wanted)
        .ok_or_else(|| ConfigError::UnknownLevel {
            name: name.to_string(),
            known: levels
                .iter()
                .map(|l| l.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// ─── User Catalogs ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LevelSpec {
    name: String,
    regimes: Vec<Regime>,
}

/// Load a catalog from a JSON file: `[{"name": ..., "regimes": [...]}, ...]`.
/// Every level is validated at load time; the first malformed level aborts
/// the load with a descriptive error.
pub fn load(path: &Path) -> Result<Vec<ActivityLevel>, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let specs: Vec<LevelSpec> = serde_json::from_str(&raw)?;
    specs
        .into_iter()
        .map(|spec| ActivityLevel::new(&spec.name, spec.regimes))
        .collect()
}
