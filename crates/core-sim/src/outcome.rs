use std::fmt::Debug;

use serde::Serialize;

/// One of the two directional options a bettor can back.
pub trait Side: Copy + Eq + Debug + Serialize + Send + Sync + 'static {
    /// Both sides in draw order. Index 0 is drawn first by the generators and
    /// picked for direction draws below 0.5.
    const BOTH: [Self; 2];

    fn index(self) -> usize;

    fn opposite(self) -> Self {
        Self::BOTH[1 - self.index()]
    }
}

/// The result of one round: one of the two sides, or the neutral outcome.
pub trait Outcome: Copy + Eq + Debug + Serialize + Send + Sync + 'static {
    type Side: Side;

    /// Every outcome in draw order, neutral last.
    const ALL: [Self; 3];

    fn side(self) -> Option<Self::Side>;

    fn index(self) -> usize {
        match self.side() {
            Some(side) => side.index(),
            None => 2,
        }
    }

    fn is_neutral(self) -> bool {
        self.side().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Win,
    Loss,
    Push,
}

pub fn verdict<O: Outcome>(backed: O::Side, outcome: O) -> Verdict {
    match outcome.side() {
        None => Verdict::Push,
        Some(side) if side == backed => Verdict::Win,
        Some(_) => Verdict::Loss,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaccaratSide {
    Banker,
    Player,
}

impl Side for BaccaratSide {
    const BOTH: [Self; 2] = [Self::Banker, Self::Player];

    fn index(self) -> usize {
        match self {
            Self::Banker => 0,
            Self::Player => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaccaratOutcome {
    Banker,
    Player,
    Tie,
}

impl Outcome for BaccaratOutcome {
    type Side = BaccaratSide;

    const ALL: [Self; 3] = [Self::Banker, Self::Player, Self::Tie];

    fn side(self) -> Option<BaccaratSide> {
        match self {
            Self::Banker => Some(BaccaratSide::Banker),
            Self::Player => Some(BaccaratSide::Player),
            Self::Tie => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSide {
    Up,
    Down,
}

impl Side for MarketSide {
    const BOTH: [Self; 2] = [Self::Up, Self::Down];

    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOutcome {
    Up,
    Down,
    Flat,
}

impl Outcome for MarketOutcome {
    type Side = MarketSide;

    const ALL: [Self; 3] = [Self::Up, Self::Down, Self::Flat];

    fn side(self) -> Option<MarketSide> {
        match self {
            Self::Up => Some(MarketSide::Up),
            Self::Down => Some(MarketSide::Down),
            Self::Flat => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        verdict, BaccaratOutcome, BaccaratSide, MarketOutcome, MarketSide, Outcome, Side, Verdict,
    };

    #[test]
    fn verdict_distinguishes_win_loss_and_push() {
        assert_eq!(
            verdict(BaccaratSide::Banker, BaccaratOutcome::Banker),
            Verdict::Win
        );
        assert_eq!(
            verdict(BaccaratSide::Banker, BaccaratOutcome::Player),
            Verdict::Loss
        );
        assert_eq!(
            verdict(BaccaratSide::Player, BaccaratOutcome::Tie),
            Verdict::Push
        );
        assert_eq!(verdict(MarketSide::Down, MarketOutcome::Down), Verdict::Win);
        assert_eq!(verdict(MarketSide::Up, MarketOutcome::Flat), Verdict::Push);
    }

    #[test]
    fn outcome_indices_follow_draw_order() {
        for (expected, outcome) in BaccaratOutcome::ALL.into_iter().enumerate() {
            assert_eq!(outcome.index(), expected);
        }
        for (expected, outcome) in MarketOutcome::ALL.into_iter().enumerate() {
            assert_eq!(outcome.index(), expected);
        }
    }

    #[test]
    fn opposite_sides_swap() {
        assert_eq!(BaccaratSide::Banker.opposite(), BaccaratSide::Player);
        assert_eq!(MarketSide::Down.opposite(), MarketSide::Up);
    }

    #[test]
    fn only_tie_and_flat_are_neutral() {
        assert!(BaccaratOutcome::Tie.is_neutral());
        assert!(MarketOutcome::Flat.is_neutral());
        assert!(!BaccaratOutcome::Player.is_neutral());
        assert!(!MarketOutcome::Up.is_neutral());
    }
}
