pub mod direction;
pub mod martingale;

pub use direction::pick_side;
pub use martingale::{Martingale, StrategyError};
