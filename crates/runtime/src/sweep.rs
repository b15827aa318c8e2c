use core_sim::{Game, HistoryRetention, SeededSource, SimulationConfig};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::logging::TracingRunLogWriter;
use crate::runner::{SimulationError, SimulationRun};
use crate::stats::{rate_pct, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("a sweep needs at least one run")]
    NoRuns,
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// The part of one run's report a sweep keeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRun {
    pub seed: u64,
    pub termination: Termination,
    pub total_rounds: u64,
    pub final_balance: f64,
    pub profit_loss_pct: f64,
    pub longest_lose_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSummary {
    pub game: &'static str,
    pub base_seed: u64,
    pub runs: usize,
    pub mean_final_balance: f64,
    pub min_final_balance: f64,
    pub max_final_balance: f64,
    pub mean_profit_loss_pct: f64,
    pub profitable_rate_pct: f64,
    /// Share of runs that ended because the balance fell below the base bet.
    pub bust_rate_pct: f64,
    pub mean_rounds: f64,
    pub worst_lose_streak: u32,
    pub results: Vec<SweepRun>,
}

/// Seed for run `index` of a sweep. One LCG step over the mixed pair keeps
/// neighbouring indices far apart.
pub fn derive_seed(base_seed: u64, index: u64) -> u64 {
    base_seed
        .wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// Plays `runs` independent simulations in parallel. Each run owns its own
/// seeded stream, so the summary does not depend on thread scheduling.
pub fn run_sweep<G: Game + Clone>(
    game: &G,
    config: SimulationConfig,
    runs: usize,
    base_seed: u64,
) -> Result<SweepSummary, SweepError> {
    if runs == 0 {
        return Err(SweepError::NoRuns);
    }
    config.validate().map_err(SimulationError::from)?;

    let config = SimulationConfig {
        history: HistoryRetention::Capped(1),
        seed: None,
        ..config
    };

    let results: Vec<SweepRun> = (0..runs as u64)
        .into_par_iter()
        .map(|index| -> Result<SweepRun, SimulationError> {
            let seed = derive_seed(base_seed, index);
            let mut log = TracingRunLogWriter::new(game.name());
            let run = SimulationRun::new(game.clone(), config, SeededSource::new(seed))?;
            let stats = run.run_to_completion(&mut log);

            Ok(SweepRun {
                seed,
                termination: stats.termination,
                total_rounds: stats.total_rounds,
                final_balance: stats.final_balance,
                profit_loss_pct: stats.profit_loss_pct,
                longest_lose_streak: stats.streaks.longest_lose_streak,
            })
        })
        .collect::<Result<_, _>>()?;

    let summary = summarize(game.name(), base_seed, results);
    tracing::info!(
        game = summary.game,
        runs = summary.runs,
        mean_final_balance = summary.mean_final_balance,
        bust_rate_pct = summary.bust_rate_pct,
        "sweep finished"
    );

    Ok(summary)
}

fn summarize(game: &'static str, base_seed: u64, results: Vec<SweepRun>) -> SweepSummary {
    let runs = results.len();
    let count = runs as f64;
    let busted = results
        .iter()
        .filter(|run| run.termination == Termination::InsufficientFunds)
        .count();
    let profitable = results
        .iter()
        .filter(|run| run.profit_loss_pct > 0.0)
        .count();

    SweepSummary {
        game,
        base_seed,
        runs,
        mean_final_balance: results.iter().map(|run| run.final_balance).sum::<f64>() / count,
        min_final_balance: results
            .iter()
            .map(|run| run.final_balance)
            .fold(f64::INFINITY, f64::min),
        max_final_balance: results
            .iter()
            .map(|run| run.final_balance)
            .fold(f64::NEG_INFINITY, f64::max),
        mean_profit_loss_pct: results.iter().map(|run| run.profit_loss_pct).sum::<f64>() / count,
        profitable_rate_pct: rate_pct(profitable as u64, runs as u64),
        bust_rate_pct: rate_pct(busted as u64, runs as u64),
        mean_rounds: results.iter().map(|run| run.total_rounds as f64).sum::<f64>() / count,
        worst_lose_streak: results
            .iter()
            .map(|run| run.longest_lose_streak)
            .max()
            .unwrap_or(0),
        results,
    }
}

#[cfg(test)]
mod tests {
    use core_sim::{BaccaratGame, MarketGame, MarketKind, SimulationConfig};

    use super::{derive_seed, run_sweep, SweepError};
    use crate::runner::run_simulation;

    #[test]
    fn sweep_is_independent_of_scheduling() {
        let config = SimulationConfig::new(200, 1_000.0, 10.0, 640.0);

        let first = run_sweep(&BaccaratGame, config, 16, 99).unwrap();
        let second = run_sweep(&BaccaratGame, config, 16, 99).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.runs, 16);
        assert_eq!(first.results.len(), 16);
    }

    #[test]
    fn sweep_runs_match_individual_seeded_runs() {
        let config = SimulationConfig::new(150, 500.0, 5.0, 160.0);
        let game = MarketGame::new(MarketKind::Stock);

        let summary = run_sweep(&game, config, 4, 3).unwrap();

        for (index, run) in summary.results.iter().enumerate() {
            assert_eq!(run.seed, derive_seed(3, index as u64));
            let single = run_simulation(game, config.with_seed(run.seed)).unwrap();
            assert_eq!(single.final_balance, run.final_balance);
            assert_eq!(single.total_rounds, run.total_rounds);
        }
    }

    #[test]
    fn summary_bounds_bracket_the_mean() {
        let config = SimulationConfig::new(300, 200.0, 10.0, 1_000.0);

        let summary = run_sweep(&BaccaratGame, config, 32, 1).unwrap();

        assert!(summary.min_final_balance <= summary.mean_final_balance);
        assert!(summary.mean_final_balance <= summary.max_final_balance);
        assert!((0.0..=100.0).contains(&summary.bust_rate_pct));
        assert!(summary.mean_rounds <= 300.0);
    }

    #[test]
    fn rejects_empty_and_invalid_sweeps() {
        let config = SimulationConfig::new(10, 1_000.0, 10.0, 640.0);
        assert_eq!(
            run_sweep(&BaccaratGame, config, 0, 1),
            Err(SweepError::NoRuns)
        );

        let invalid = SimulationConfig::new(10, 0.0, 10.0, 640.0);
        assert!(matches!(
            run_sweep(&BaccaratGame, invalid, 4, 1),
            Err(SweepError::Simulation(_))
        ));
    }

    #[test]
    fn derived_seeds_differ_per_index() {
        assert_ne!(derive_seed(7, 0), derive_seed(7, 1));
        assert_ne!(derive_seed(7, 0), derive_seed(8, 0));
    }
}
