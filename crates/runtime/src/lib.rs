pub mod logging;
pub mod runner;
pub mod stats;
pub mod streaks;
pub mod sweep;

pub use runner::{run_simulation, RunPhase, SimulationError, SimulationRun};
pub use stats::{OutcomeCount, SimulationStats, StatsAccumulator, Termination};
pub use streaks::{SideRun, StreakSummary, StreakTracker};
pub use sweep::{derive_seed, run_sweep, SweepError, SweepRun, SweepSummary};
