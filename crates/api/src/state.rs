use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use core_sim::HistoryRetention;

/// Bounds applied to incoming requests before any work is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiLimits {
    pub max_rounds: u64,
    pub max_sweep_runs: usize,
    /// Retention used when a request does not name one.
    pub default_history: HistoryRetention,
}

impl Default for ApiLimits {
    fn default() -> Self {
        Self {
            max_rounds: 1_000_000,
            max_sweep_runs: 1_000,
            default_history: HistoryRetention::Capped(100),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartRunError {
    RunIdOverflow,
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_run_id: Arc<AtomicU64>,
    limits: ApiLimits,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_limits(ApiLimits::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ApiLimits) -> Self {
        Self {
            next_run_id: Arc::new(AtomicU64::new(0)),
            limits,
        }
    }

    pub fn limits(&self) -> ApiLimits {
        self.limits
    }

    pub fn start_run(&self) -> Result<u64, StartRunError> {
        let previous = self
            .next_run_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartRunError::RunIdOverflow)?;

        Ok(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use core_sim::HistoryRetention;

    use super::{ApiLimits, AppState};

    #[test]
    fn start_run_returns_overflow_error_at_u64_max() {
        let state = AppState::new();
        state.next_run_id.store(u64::MAX, Ordering::Relaxed);

        assert!(state.start_run().is_err());
    }

    #[test]
    fn run_ids_start_at_one_and_increase() {
        let state = AppState::new();

        assert_eq!(state.start_run(), Ok(1));
        assert_eq!(state.start_run(), Ok(2));
    }

    #[test]
    fn default_limits_cap_history_at_one_hundred_rounds() {
        let limits = AppState::new().limits();

        assert_eq!(limits, ApiLimits::default());
        assert_eq!(limits.default_history, HistoryRetention::Capped(100));
    }
}
