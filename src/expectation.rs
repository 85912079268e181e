// Closed-Form Expected-Value Calculator
// Probability-weighted midpoint return per trade, compounded over N trades

use crate::types::{ActivityLevel, MicroUsdc};

/// Expected per-trade percentage change for an activity level.
///
/// Each regime contributes its uniform-range midpoint `(min + max) / 2`
/// weighted by its selection probability. Deterministic, no randomness.
pub fn expected_change_per_trade(level: &ActivityLevel) -> f64 {
    level
        .regimes()
        .iter()
        .map(|r| r.midpoint_pct() * r.probability / 100.0)
        .sum()
}

/// Closed-form expected final price after `trades` compounded trades, in USDC.
///
/// `trades = 0` returns the starting price exactly.
pub fn expected_final_price(starting_price: MicroUsdc, trades: u32, level: &ActivityLevel) -> f64 {
    let per_trade = expected_change_per_trade(level);
    starting_price.as_usdc() * (1.0 + per_trade / 100.0).powi(trades as i32)
}
