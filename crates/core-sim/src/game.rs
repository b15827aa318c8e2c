use crate::generators::{draw_baccarat, draw_market, Draw};
use crate::market::{MarketKind, MarketProfile};
use crate::outcome::{BaccaratOutcome, BaccaratSide, MarketOutcome, MarketSide, Outcome};
use crate::payout::{baccarat_payout, market_payout};
use crate::rng::RandomSource;

pub type SideOf<G> = <<G as Game>::Outcome as Outcome>::Side;

/// An outcome generator paired with the payout rules that settle it.
pub trait Game: Send + Sync {
    type Outcome: Outcome;

    fn name(&self) -> &'static str;

    fn draw(&self, source: &mut dyn RandomSource) -> Draw<Self::Outcome>;

    /// Amount handed back to the bettor, stake included. Never negative.
    fn payout(
        &self,
        side: <Self::Outcome as Outcome>::Side,
        stake: f64,
        draw: &Draw<Self::Outcome>,
    ) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaccaratGame;

impl Game for BaccaratGame {
    type Outcome = BaccaratOutcome;

    fn name(&self) -> &'static str {
        "baccarat"
    }

    fn draw(&self, source: &mut dyn RandomSource) -> Draw<BaccaratOutcome> {
        Draw::discrete(draw_baccarat(source))
    }

    fn payout(&self, side: BaccaratSide, stake: f64, draw: &Draw<BaccaratOutcome>) -> f64 {
        baccarat_payout(side, stake, draw.outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketGame {
    profile: MarketProfile,
}

impl MarketGame {
    pub fn new(kind: MarketKind) -> Self {
        Self {
            profile: kind.profile(),
        }
    }

    pub fn profile(&self) -> &MarketProfile {
        &self.profile
    }
}

impl Game for MarketGame {
    type Outcome = MarketOutcome;

    fn name(&self) -> &'static str {
        self.profile.kind.as_str()
    }

    fn draw(&self, source: &mut dyn RandomSource) -> Draw<MarketOutcome> {
        draw_market(&self.profile, source)
    }

    fn payout(&self, side: MarketSide, stake: f64, draw: &Draw<MarketOutcome>) -> f64 {
        market_payout(
            side,
            stake,
            draw.outcome,
            draw.move_pct.unwrap_or(0.0),
            self.profile.commission,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::generators::Draw;
    use crate::market::MarketKind;
    use crate::outcome::{BaccaratOutcome, BaccaratSide, MarketOutcome, MarketSide};
    use crate::rng::ScriptedSource;

    use super::{BaccaratGame, Game, MarketGame};

    #[test]
    fn baccarat_game_draws_without_a_move() {
        let mut source = ScriptedSource::new(vec![0.3]);

        let draw = BaccaratGame.draw(&mut source);

        assert_eq!(draw, Draw::discrete(BaccaratOutcome::Banker));
        assert_eq!(
            BaccaratGame.payout(BaccaratSide::Banker, 10.0, &draw),
            19.5
        );
    }

    #[test]
    fn market_game_applies_its_commission() {
        let game = MarketGame::new(MarketKind::Forex);
        let draw = Draw {
            outcome: MarketOutcome::Up,
            move_pct: Some(1.0),
        };

        let payout = game.payout(MarketSide::Up, 100.0, &draw);

        assert!((payout - 101.0 * (1.0 - 0.0005)).abs() < 1e-9);
        assert_eq!(game.name(), "forex");
    }
}
