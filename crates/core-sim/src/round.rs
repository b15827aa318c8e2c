use serde::Serialize;

use crate::outcome::Outcome;

/// One settled round. Created once by the runner and never changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult<O: Outcome> {
    /// 1-based and contiguous.
    pub round: u64,
    pub outcome: O,
    pub side: O::Side,
    pub bet_amount: f64,
    /// Returned to the bettor after commission, stake included.
    pub payout: f64,
    pub net: f64,
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_pct: Option<f64>,
}
