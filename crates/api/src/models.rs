use core_sim::{
    BaccaratOutcome, HistoryRetention, MarketKind, MarketOutcome, SimulationConfig,
};
use runtime::{SimulationStats, SweepSummary};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameSelection {
    Baccarat,
    Market { market: MarketKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RunParams {
    pub rounds: u64,
    pub initial_capital: f64,
    pub base_bet: f64,
    pub max_bet: f64,
    #[serde(default)]
    pub history: Option<HistoryRetention>,
}

impl RunParams {
    pub fn into_config(self, default_history: HistoryRetention) -> SimulationConfig {
        SimulationConfig::new(self.rounds, self.initial_capital, self.base_bet, self.max_bet)
            .with_history(self.history.unwrap_or(default_history))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SimulationRequest {
    pub game: GameSelection,
    #[serde(flatten)]
    pub params: RunParams,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SweepRequest {
    pub game: GameSelection,
    #[serde(flatten)]
    pub params: RunParams,
    pub runs: usize,
    #[serde(default)]
    pub base_seed: u64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SimulationReport {
    Baccarat(SimulationStats<BaccaratOutcome>),
    Market(SimulationStats<MarketOutcome>),
}

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub run_id: u64,
    pub report: SimulationReport,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub summary: SweepSummary,
}
