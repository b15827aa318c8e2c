use core_sim::{HistoryRetention, Outcome, RoundResult, SimulationConfig, Verdict};
use serde::Serialize;

use crate::streaks::{StreakSummary, StreakTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every requested round was played.
    Exhausted,
    /// The balance dropped below the base bet before the last round.
    InsufficientFunds,
    /// The caller stopped the run between rounds.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeCount<O> {
    pub outcome: O,
    pub count: u64,
    pub rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStats<O: Outcome> {
    pub game: &'static str,
    pub seed: Option<u64>,
    pub termination: Termination,
    pub rounds_requested: u64,
    pub total_rounds: u64,
    pub initial_capital: f64,
    pub final_balance: f64,
    pub profit_loss: f64,
    pub profit_loss_pct: f64,
    pub avg_profit_per_round: f64,
    pub outcome_counts: [OutcomeCount<O>; 3],
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub win_rate_pct: f64,
    pub streaks: StreakSummary<O::Side>,
    pub total_staked: f64,
    pub turnover_multiple: f64,
    pub min_bet: f64,
    pub max_bet: f64,
    pub avg_bet: f64,
    pub min_balance: f64,
    pub max_balance: f64,
    pub max_drawdown: f64,
    pub max_drawdown_pct: f64,
    pub history: Vec<RoundResult<O>>,
    pub history_truncated: bool,
    pub balance_trace: Vec<f64>,
}

impl<O: Outcome> SimulationStats<O> {
    pub fn count_of(&self, outcome: O) -> u64 {
        self.outcome_counts[outcome.index()].count
    }
}

/// Folds settled rounds into the running totals the final report needs.
#[derive(Debug, Clone)]
pub struct StatsAccumulator<O: Outcome> {
    retention: HistoryRetention,
    counts: [u64; 3],
    wins: u64,
    losses: u64,
    pushes: u64,
    total_staked: f64,
    min_bet: Option<f64>,
    max_bet: Option<f64>,
    streaks: StreakTracker<O>,
    history: Vec<RoundResult<O>>,
    history_truncated: bool,
    balance_trace: Vec<f64>,
}

impl<O: Outcome> StatsAccumulator<O> {
    pub fn new(retention: HistoryRetention) -> Self {
        Self {
            retention,
            counts: [0; 3],
            wins: 0,
            losses: 0,
            pushes: 0,
            total_staked: 0.0,
            min_bet: None,
            max_bet: None,
            streaks: StreakTracker::new(),
            history: Vec::new(),
            history_truncated: false,
            balance_trace: Vec::new(),
        }
    }

    pub fn record(&mut self, round: RoundResult<O>, verdict: Verdict) {
        self.counts[round.outcome.index()] += 1;
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Push => self.pushes += 1,
        }

        self.total_staked += round.bet_amount;
        self.min_bet = Some(self.min_bet.map_or(round.bet_amount, |m| m.min(round.bet_amount)));
        self.max_bet = Some(self.max_bet.map_or(round.bet_amount, |m| m.max(round.bet_amount)));

        self.streaks.observe(round.side, round.outcome);
        self.balance_trace.push(round.balance);

        if self.retention.admits(self.history.len()) {
            self.history.push(round);
        } else {
            self.history_truncated = true;
        }
    }

    pub fn executed(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn streaks(&self) -> &StreakTracker<O> {
        &self.streaks
    }

    pub fn finish(
        self,
        game: &'static str,
        seed: Option<u64>,
        config: &SimulationConfig,
        final_balance: f64,
        termination: Termination,
    ) -> SimulationStats<O> {
        let executed = self.executed();
        let initial_capital = config.initial_capital;
        let profit_loss = final_balance - initial_capital;
        let (min_balance, max_balance) = extremes(&self.balance_trace, initial_capital);
        let (max_drawdown, max_drawdown_pct) = max_drawdown(initial_capital, &self.balance_trace);
        let counts = self.counts;

        SimulationStats {
            game,
            seed,
            termination,
            rounds_requested: config.rounds,
            total_rounds: executed,
            initial_capital,
            final_balance,
            profit_loss,
            profit_loss_pct: profit_loss / initial_capital * 100.0,
            avg_profit_per_round: per_round(profit_loss, executed),
            outcome_counts: O::ALL.map(|outcome| OutcomeCount {
                outcome,
                count: counts[outcome.index()],
                rate_pct: rate_pct(counts[outcome.index()], executed),
            }),
            wins: self.wins,
            losses: self.losses,
            pushes: self.pushes,
            win_rate_pct: rate_pct(self.wins, executed),
            streaks: self.streaks.summary(),
            total_staked: self.total_staked,
            turnover_multiple: self.total_staked / initial_capital,
            min_bet: self.min_bet.unwrap_or(config.base_bet),
            max_bet: self.max_bet.unwrap_or(config.base_bet),
            avg_bet: per_round(self.total_staked, executed),
            min_balance,
            max_balance,
            max_drawdown,
            max_drawdown_pct,
            history: self.history,
            history_truncated: self.history_truncated,
            balance_trace: self.balance_trace,
        }
    }
}

/// `count / total` as a percentage, 0 for an empty run.
pub fn rate_pct(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 / total as f64 * 100.0
}

fn per_round(amount: f64, executed: u64) -> f64 {
    if executed == 0 {
        return 0.0;
    }

    amount / executed as f64
}

fn extremes(trace: &[f64], fallback: f64) -> (f64, f64) {
    if trace.is_empty() {
        return (fallback, fallback);
    }

    trace
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
            (lo.min(value), hi.max(value))
        })
}

/// Largest peak-to-trough drop, with the peak seeded by the starting
/// capital. Returns the drop and its size relative to that peak in percent.
pub fn max_drawdown(initial_capital: f64, trace: &[f64]) -> (f64, f64) {
    let mut peak = initial_capital;
    let mut worst = 0.0;
    let mut worst_pct = 0.0;

    for &balance in trace {
        peak = f64::max(peak, balance);
        let drawdown = peak - balance;
        if drawdown > worst {
            worst = drawdown;
            worst_pct = if peak > 0.0 { drawdown / peak * 100.0 } else { 0.0 };
        }
    }

    (worst, worst_pct)
}

#[cfg(test)]
mod tests {
    use core_sim::{
        BaccaratOutcome, BaccaratSide, HistoryRetention, RoundResult, SimulationConfig, Verdict,
    };

    use super::{max_drawdown, rate_pct, StatsAccumulator, Termination};

    fn round(index: u64, outcome: BaccaratOutcome, bet: f64, payout: f64, balance: f64) -> RoundResult<BaccaratOutcome> {
        RoundResult {
            round: index,
            outcome,
            side: BaccaratSide::Banker,
            bet_amount: bet,
            payout,
            net: payout - bet,
            balance,
            move_pct: None,
        }
    }

    #[test]
    fn rates_are_zero_for_empty_runs() {
        assert_eq!(rate_pct(0, 0), 0.0);
        assert_eq!(rate_pct(1, 4), 25.0);
    }

    #[test]
    fn drawdown_tracks_peak_to_trough() {
        let (drop, pct) = max_drawdown(100.0, &[120.0, 90.0, 130.0, 110.0]);

        assert_eq!(drop, 30.0);
        assert_eq!(pct, 25.0);
        assert_eq!(max_drawdown(100.0, &[]), (0.0, 0.0));
    }

    #[test]
    fn empty_run_falls_back_to_config_values() {
        let config = SimulationConfig::new(100, 100.0, 500.0, 1_000.0);
        let stats = StatsAccumulator::<BaccaratOutcome>::new(HistoryRetention::Unlimited).finish(
            "baccarat",
            Some(1),
            &config,
            100.0,
            Termination::InsufficientFunds,
        );

        assert_eq!(stats.total_rounds, 0);
        assert_eq!(stats.profit_loss, 0.0);
        assert_eq!(stats.avg_profit_per_round, 0.0);
        assert_eq!(stats.min_bet, 500.0);
        assert_eq!(stats.max_bet, 500.0);
        assert_eq!(stats.min_balance, 100.0);
        assert_eq!(stats.max_balance, 100.0);
        assert_eq!(stats.win_rate_pct, 0.0);
        assert!(stats.outcome_counts.iter().all(|count| count.rate_pct == 0.0));
    }

    #[test]
    fn accumulator_reduces_rounds_into_report() {
        let config = SimulationConfig::new(10, 1_000.0, 10.0, 100.0);
        let mut stats = StatsAccumulator::new(HistoryRetention::Capped(2));

        stats.record(round(1, BaccaratOutcome::Player, 10.0, 0.0, 990.0), Verdict::Loss);
        stats.record(round(2, BaccaratOutcome::Tie, 20.0, 20.0, 990.0), Verdict::Push);
        stats.record(round(3, BaccaratOutcome::Banker, 20.0, 39.0, 1_009.0), Verdict::Win);
        stats.record(round(4, BaccaratOutcome::Player, 10.0, 0.0, 999.0), Verdict::Loss);

        let report = stats.finish("baccarat", None, &config, 999.0, Termination::Exhausted);

        assert_eq!(report.total_rounds, 4);
        assert_eq!(report.count_of(BaccaratOutcome::Player), 2);
        assert_eq!(report.count_of(BaccaratOutcome::Tie), 1);
        assert_eq!(report.outcome_counts[1].rate_pct, 50.0);
        assert_eq!((report.wins, report.losses, report.pushes), (1, 2, 1));
        assert_eq!(report.total_staked, 60.0);
        assert_eq!(report.turnover_multiple, 0.06);
        assert_eq!(report.min_bet, 10.0);
        assert_eq!(report.max_bet, 20.0);
        assert_eq!(report.min_balance, 990.0);
        assert_eq!(report.max_balance, 1_009.0);
        assert_eq!(report.profit_loss, -1.0);
        assert_eq!(report.avg_profit_per_round, -0.25);
        assert_eq!(report.history.len(), 2);
        assert!(report.history_truncated);
        assert_eq!(report.balance_trace.len(), 4);
        assert_eq!(report.max_drawdown, 10.0);
    }
}
