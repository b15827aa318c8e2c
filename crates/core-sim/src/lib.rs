mod config;
mod game;
mod generators;
mod market;
mod outcome;
mod payout;
mod rng;
mod round;

pub use config::{ConfigError, HistoryRetention, SimulationConfig};
pub use game::{BaccaratGame, Game, MarketGame, SideOf};
pub use generators::{
    draw_baccarat, draw_market, round_to_cents, standard_normal, Draw, BANKER_PROBABILITY,
    PLAYER_PROBABILITY, TIE_PROBABILITY,
};
pub use market::{market_catalog, MarketKind, MarketProfile};
pub use outcome::{
    verdict, BaccaratOutcome, BaccaratSide, MarketOutcome, MarketSide, Outcome, Side, Verdict,
};
pub use payout::{baccarat_payout, market_payout, BANKER_NET_MULTIPLIER};
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use round::RoundResult;

#[cfg(test)]
mod tests {
    use super::{BANKER_PROBABILITY, PLAYER_PROBABILITY, TIE_PROBABILITY};

    #[test]
    fn baccarat_table_sums_to_one() {
        let total = BANKER_PROBABILITY + PLAYER_PROBABILITY + TIE_PROBABILITY;
        assert!((total - 1.0).abs() < 1e-12);
    }
}
