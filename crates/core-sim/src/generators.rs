use std::f64::consts::PI;

use crate::market::MarketProfile;
use crate::outcome::{BaccaratOutcome, MarketOutcome};
use crate::rng::RandomSource;

pub const BANKER_PROBABILITY: f64 = 0.4586;
pub const PLAYER_PROBABILITY: f64 = 0.4462;
pub const TIE_PROBABILITY: f64 = 0.0952;

/// Floor for the first Box-Muller uniform so `ln` stays finite.
const MIN_NORMAL_UNIFORM: f64 = 1e-10;
/// Smallest move a directional market outcome can produce, in percent.
const MIN_MOVE_PCT: f64 = 0.1;

/// A sampled outcome plus the signed percent move behind it, when the game
/// has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw<O> {
    pub outcome: O,
    pub move_pct: Option<f64>,
}

impl<O> Draw<O> {
    pub fn discrete(outcome: O) -> Self {
        Self {
            outcome,
            move_pct: None,
        }
    }
}

pub fn draw_baccarat(source: &mut dyn RandomSource) -> BaccaratOutcome {
    let unit = source.next_unit();

    if unit < BANKER_PROBABILITY {
        BaccaratOutcome::Banker
    } else if unit < BANKER_PROBABILITY + PLAYER_PROBABILITY {
        BaccaratOutcome::Player
    } else {
        BaccaratOutcome::Tie
    }
}

pub fn draw_market(profile: &MarketProfile, source: &mut dyn RandomSource) -> Draw<MarketOutcome> {
    let unit = source.next_unit();

    let outcome = if unit < profile.up_probability {
        MarketOutcome::Up
    } else if unit < profile.up_probability + profile.down_probability {
        MarketOutcome::Down
    } else {
        MarketOutcome::Flat
    };

    let move_pct = match outcome {
        MarketOutcome::Up => move_magnitude_pct(profile.avg_change_pct, source),
        MarketOutcome::Down => -move_magnitude_pct(profile.avg_change_pct, source),
        MarketOutcome::Flat => 0.0,
    };

    Draw {
        outcome,
        move_pct: Some(move_pct),
    }
}

fn move_magnitude_pct(avg_change_pct: f64, source: &mut dyn RandomSource) -> f64 {
    let z = standard_normal(source);
    round_to_cents(z.abs() * avg_change_pct + MIN_MOVE_PCT)
}

/// Box-Muller transform over two uniform draws.
pub fn standard_normal(source: &mut dyn RandomSource) -> f64 {
    let u1 = source.next_unit().max(MIN_NORMAL_UNIFORM);
    let u2 = source.next_unit();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
