// Bonding-Curve Regime Simulator
// Offline validation of candidate pricing-curve parameters: samples weighted
// market regimes and compares Monte Carlo price trajectories against the
// closed-form expectation before anything ships on-chain.

pub mod catalog;
pub mod expectation;
pub mod report;
pub mod simulation;
pub mod types;

pub use report::{RegimeUsage, SimulationReport, Stats};
pub use simulation::{run, SimConfig, DEFAULT_RUNS, SAMPLE_TRAJECTORY_MAX};
pub use types::{ActivityLevel, ConfigError, MicroUsdc, Regime, TrajectoryStep};
