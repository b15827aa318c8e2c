use core_sim::{
    verdict, ConfigError, Game, RandomSource, RoundResult, SeededSource, SideOf,
    SimulationConfig,
};
use strategy::{pick_side, Martingale, StrategyError};
use thiserror::Error;

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter, TracingRunLogWriter};
use crate::stats::{SimulationStats, StatsAccumulator, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Ready,
    Running,
    Finished(Termination),
}

/// A single simulation, advanced one round at a time.
///
/// Callers that need to stop early can drive [`SimulationRun::step`] and
/// check their own flag between rounds.
pub struct SimulationRun<G: Game, R: RandomSource> {
    game: G,
    config: SimulationConfig,
    source: R,
    stake: Martingale,
    balance: f64,
    rounds_played: u64,
    phase: RunPhase,
    stats: StatsAccumulator<G::Outcome>,
}

impl<G: Game, R: RandomSource> SimulationRun<G, R> {
    pub fn new(game: G, config: SimulationConfig, source: R) -> Result<Self, SimulationError> {
        config.validate()?;
        let stake = Martingale::new(config.base_bet, config.max_bet)?;

        Ok(Self {
            game,
            config,
            source,
            stake,
            balance: config.initial_capital,
            rounds_played: 0,
            phase: RunPhase::Ready,
            stats: StatsAccumulator::new(config.history),
        })
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn current_bet(&self) -> f64 {
        self.stake.current_bet()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn stats(&self) -> &StatsAccumulator<G::Outcome> {
        &self.stats
    }

    /// Plays at most one round. Returns the phase after the call; once a
    /// terminal phase is reached further calls do nothing.
    pub fn step(&mut self, log: &mut dyn RunLogWriter) -> RunPhase {
        match self.phase {
            RunPhase::Finished(_) => return self.phase,
            RunPhase::Ready => {
                log.write(RunLogEvent::new(0, RunLogEventKind::RunStarted, self.balance));
                self.phase = RunPhase::Running;
            }
            RunPhase::Running => {}
        }

        if self.rounds_played >= self.config.rounds {
            return self.terminate(Termination::Exhausted, log);
        }
        if self.balance < self.config.base_bet {
            return self.terminate(Termination::InsufficientFunds, log);
        }

        self.play_round(log);
        self.phase
    }

    fn play_round(&mut self, log: &mut dyn RunLogWriter) {
        let draw = self.game.draw(&mut self.source);
        let side: SideOf<G> = pick_side(&mut self.source);

        let bet_amount = self.stake.stake_for(self.balance);
        self.balance -= bet_amount;
        let payout = self.game.payout(side, bet_amount, &draw);
        self.balance += payout;

        let verdict = verdict(side, draw.outcome);
        self.stake.advance(verdict);
        self.rounds_played += 1;

        log.write(RunLogEvent::settled(
            self.rounds_played,
            self.balance,
            bet_amount,
        ));
        self.stats.record(
            RoundResult {
                round: self.rounds_played,
                outcome: draw.outcome,
                side,
                bet_amount,
                payout,
                net: payout - bet_amount,
                balance: self.balance,
                move_pct: draw.move_pct,
            },
            verdict,
        );
    }

    fn terminate(&mut self, termination: Termination, log: &mut dyn RunLogWriter) -> RunPhase {
        let kind = match termination {
            Termination::Exhausted => RunLogEventKind::RoundsExhausted,
            Termination::InsufficientFunds => RunLogEventKind::InsufficientFunds,
            Termination::Cancelled => RunLogEventKind::Cancelled,
        };
        log.write(RunLogEvent::new(self.rounds_played, kind, self.balance));
        self.phase = RunPhase::Finished(termination);
        self.phase
    }

    pub fn run_to_completion(self, log: &mut dyn RunLogWriter) -> SimulationStats<G::Outcome> {
        self.run_until(log, || false)
    }

    /// Runs until a terminal phase or until `cancelled` returns true, which
    /// is checked before every round.
    pub fn run_until(
        mut self,
        log: &mut dyn RunLogWriter,
        mut cancelled: impl FnMut() -> bool,
    ) -> SimulationStats<G::Outcome> {
        while !matches!(self.phase, RunPhase::Finished(_)) {
            if cancelled() {
                self.terminate(Termination::Cancelled, log);
                break;
            }
            self.step(log);
        }

        self.into_stats()
    }

    fn into_stats(self) -> SimulationStats<G::Outcome> {
        let termination = match self.phase {
            RunPhase::Finished(termination) => termination,
            RunPhase::Ready | RunPhase::Running => Termination::Cancelled,
        };

        let stats = self.stats.finish(
            self.game.name(),
            self.source.seed(),
            &self.config,
            self.balance,
            termination,
        );

        tracing::info!(
            game = stats.game,
            seed = stats.seed,
            termination = ?stats.termination,
            total_rounds = stats.total_rounds,
            final_balance = stats.final_balance,
            profit_loss = stats.profit_loss,
            "simulation finished"
        );

        stats
    }
}

/// Runs `game` under `config` with a ChaCha stream seeded from
/// `config.seed`, or from OS entropy when no seed is given.
pub fn run_simulation<G: Game>(
    game: G,
    config: SimulationConfig,
) -> Result<SimulationStats<G::Outcome>, SimulationError> {
    let source = config
        .seed
        .map(SeededSource::new)
        .unwrap_or_else(SeededSource::from_entropy);
    let mut log = TracingRunLogWriter::new(game.name());

    Ok(SimulationRun::new(game, config, source)?.run_to_completion(&mut log))
}
