use core_sim::Verdict;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("base bet must be a finite positive amount")]
    InvalidBaseBet,
    #[error("max bet must be finite and at least the base bet")]
    InvalidMaxBet,
}

/// Double after a loss, reset after a win, hold on a push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Martingale {
    base_bet: f64,
    max_bet: f64,
    current_bet: f64,
}

impl Martingale {
    pub fn new(base_bet: f64, max_bet: f64) -> Result<Self, StrategyError> {
        if !base_bet.is_finite() || base_bet <= 0.0 {
            return Err(StrategyError::InvalidBaseBet);
        }
        if !max_bet.is_finite() || max_bet < base_bet {
            return Err(StrategyError::InvalidMaxBet);
        }

        Ok(Self {
            base_bet,
            max_bet,
            current_bet: base_bet,
        })
    }

    pub fn base_bet(&self) -> f64 {
        self.base_bet
    }

    pub fn max_bet(&self) -> f64 {
        self.max_bet
    }

    pub fn current_bet(&self) -> f64 {
        self.current_bet
    }

    /// What actually goes on the table. A short balance shrinks the stake
    /// instead of failing the round.
    pub fn stake_for(&self, balance: f64) -> f64 {
        self.current_bet.min(self.max_bet).min(balance)
    }

    pub fn advance(&mut self, verdict: Verdict) {
        self.current_bet = match verdict {
            Verdict::Push => self.current_bet,
            Verdict::Win => self.base_bet,
            Verdict::Loss => (self.current_bet * 2.0).min(self.max_bet),
        };
    }
}
