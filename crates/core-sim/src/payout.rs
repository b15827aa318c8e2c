use crate::outcome::{BaccaratOutcome, BaccaratSide, MarketOutcome, MarketSide};

/// Net multiplier on a winning banker bet after the house commission.
pub const BANKER_NET_MULTIPLIER: f64 = 0.95;

/// Amount returned to the bettor, stake included.
pub fn baccarat_payout(side: BaccaratSide, stake: f64, outcome: BaccaratOutcome) -> f64 {
    match (side, outcome) {
        (_, BaccaratOutcome::Tie) => stake,
        (BaccaratSide::Banker, BaccaratOutcome::Banker) => stake + stake * BANKER_NET_MULTIPLIER,
        (BaccaratSide::Player, BaccaratOutcome::Player) => stake * 2.0,
        _ => 0.0,
    }
}

/// Amount returned on a market bet. Losses scale with the size of the move
/// and never go below zero, even for moves of 100% or more.
pub fn market_payout(
    side: MarketSide,
    stake: f64,
    outcome: MarketOutcome,
    move_pct: f64,
    commission: f64,
) -> f64 {
    let magnitude = move_pct.abs() / 100.0;
    let after_fee = 1.0 - commission;

    match (side, outcome) {
        (_, MarketOutcome::Flat) => stake * after_fee,
        (MarketSide::Up, MarketOutcome::Up) | (MarketSide::Down, MarketOutcome::Down) => {
            stake * (1.0 + magnitude) * after_fee
        }
        _ => (stake * (1.0 - magnitude) * after_fee).max(0.0),
    }
}
