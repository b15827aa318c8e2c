use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many settled rounds the final report keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryRetention {
    #[default]
    Unlimited,
    /// Keep the first `n` rounds; later rounds still count toward every
    /// statistic but are not listed.
    Capped(usize),
}

impl HistoryRetention {
    pub fn admits(self, recorded: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Capped(cap) => recorded < cap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub rounds: u64,
    pub initial_capital: f64,
    pub base_bet: f64,
    pub max_bet: f64,
    #[serde(default)]
    pub history: HistoryRetention,
    /// Seed for the run's random stream; drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rounds must be at least 1")]
    ZeroRounds,
    #[error("initial_capital must be a finite positive amount")]
    InvalidInitialCapital,
    #[error("base_bet must be a finite positive amount")]
    InvalidBaseBet,
    #[error("max_bet must be finite and at least base_bet")]
    InvalidMaxBet,
    #[error("a capped history must keep at least one round")]
    EmptyHistoryCap,
}

impl SimulationConfig {
    pub fn new(rounds: u64, initial_capital: f64, base_bet: f64, max_bet: f64) -> Self {
        Self {
            rounds,
            initial_capital,
            base_bet,
            max_bet,
            history: HistoryRetention::Unlimited,
            seed: None,
        }
    }

    pub fn with_history(mut self, history: HistoryRetention) -> Self {
        self.history = history;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects inputs that break the caller contract. A base bet above the
    /// initial capital is accepted: it settles as a zero-round run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(ConfigError::InvalidInitialCapital);
        }
        if !self.base_bet.is_finite() || self.base_bet <= 0.0 {
            return Err(ConfigError::InvalidBaseBet);
        }
        if !self.max_bet.is_finite() || self.max_bet < self.base_bet {
            return Err(ConfigError::InvalidMaxBet);
        }
        if self.history == HistoryRetention::Capped(0) {
            return Err(ConfigError::EmptyHistoryCap);
        }

        Ok(())
    }
}
