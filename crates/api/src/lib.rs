pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;

pub use state::{ApiLimits, AppState};

pub fn app() -> Router {
    routes::router(AppState::new())
}

pub fn app_with_limits(limits: ApiLimits) -> Router {
    routes::router(AppState::with_limits(limits))
}
