use core_sim::{verdict, Outcome, Side, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunCounter {
    current: u32,
    longest: u32,
}

impl RunCounter {
    fn extend(&mut self) {
        self.current = self.current.saturating_add(1);
        self.longest = self.longest.max(self.current);
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}

/// Running streak counters over a round sequence.
///
/// Each side of the outcome, each side the bettor backs, and the bettor's
/// win and lose results carry a counter that grows on a matching round and
/// resets on the opposite one. Neutral rounds leave every counter untouched.
#[derive(Debug, Clone)]
pub struct StreakTracker<O: Outcome> {
    outcome_runs: [RunCounter; 2],
    pick_runs: [RunCounter; 2],
    wins: RunCounter,
    losses: RunCounter,
    _outcome: std::marker::PhantomData<O>,
}

impl<O: Outcome> Default for StreakTracker<O> {
    fn default() -> Self {
        Self {
            outcome_runs: [RunCounter::default(); 2],
            pick_runs: [RunCounter::default(); 2],
            wins: RunCounter::default(),
            losses: RunCounter::default(),
            _outcome: std::marker::PhantomData,
        }
    }
}

impl<O: Outcome> StreakTracker<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, backed: O::Side, outcome: O) {
        let Some(landed) = outcome.side() else {
            return;
        };

        advance_pair(&mut self.outcome_runs, landed.index());
        advance_pair(&mut self.pick_runs, backed.index());

        match verdict(backed, outcome) {
            Verdict::Win => {
                self.wins.extend();
                self.losses.reset();
            }
            Verdict::Loss => {
                self.losses.extend();
                self.wins.reset();
            }
            Verdict::Push => {}
        }
    }

    pub fn current_win_streak(&self) -> u32 {
        self.wins.current
    }

    pub fn current_lose_streak(&self) -> u32 {
        self.losses.current
    }

    pub fn current_outcome_streak(&self, side: O::Side) -> u32 {
        self.outcome_runs[side.index()].current
    }

    pub fn summary(&self) -> StreakSummary<O::Side> {
        let sides = <O::Side as Side>::BOTH;

        StreakSummary {
            longest_outcome_runs: sides.map(|side| SideRun {
                side,
                longest: self.outcome_runs[side.index()].longest,
            }),
            longest_pick_runs: sides.map(|side| SideRun {
                side,
                longest: self.pick_runs[side.index()].longest,
            }),
            longest_win_streak: self.wins.longest,
            longest_lose_streak: self.losses.longest,
        }
    }
}

fn advance_pair(pair: &mut [RunCounter; 2], hit: usize) {
    pair[hit].extend();
    pair[1 - hit].reset();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SideRun<S> {
    pub side: S,
    pub longest: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSummary<S> {
    pub longest_outcome_runs: [SideRun<S>; 2],
    pub longest_pick_runs: [SideRun<S>; 2],
    pub longest_win_streak: u32,
    pub longest_lose_streak: u32,
}

impl<S: Side> StreakSummary<S> {
    pub fn longest_outcome_run(&self, side: S) -> u32 {
        self.longest_outcome_runs[side.index()].longest
    }

    pub fn longest_pick_run(&self, side: S) -> u32 {
        self.longest_pick_runs[side.index()].longest
    }
}
