use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use core_sim::{market_catalog, BaccaratGame, MarketGame, MarketProfile};
use runtime::{run_simulation, run_sweep};

use crate::{
    error::ApiError,
    models::{
        GameSelection, RunParams, SimulationReport, SimulationRequest, SimulationResponse,
        SweepRequest, SweepResponse,
    },
    state::{ApiLimits, AppState},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/simulations", post(start_simulation))
        .route("/sweeps", post(start_sweep))
        .route("/markets", get(list_markets))
        .with_state(state)
}

fn check_rounds(params: &RunParams, limits: ApiLimits) -> Result<(), ApiError> {
    if params.rounds > limits.max_rounds {
        return Err(ApiError::LimitExceeded {
            field: "rounds",
            limit: limits.max_rounds,
        });
    }
    Ok(())
}

async fn start_simulation(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let limits = state.limits();
    check_rounds(&request.params, limits)?;

    let mut config = request.params.into_config(limits.default_history);
    config.seed = request.seed;
    config.validate().map_err(runtime::SimulationError::from)?;

    let run_id = state.start_run().map_err(|_| ApiError::RunIdOverflow)?;
    tracing::info!(run_id, game = ?request.game, rounds = config.rounds, "simulation requested");

    let report = tokio::task::spawn_blocking(move || match request.game {
        GameSelection::Baccarat => {
            run_simulation(BaccaratGame, config).map(SimulationReport::Baccarat)
        }
        GameSelection::Market { market } => {
            run_simulation(MarketGame::new(market), config).map(SimulationReport::Market)
        }
    })
    .await
    .map_err(|_| ApiError::TaskFailed)??;

    Ok(Json(SimulationResponse { run_id, report }))
}

async fn start_sweep(
    State(state): State<AppState>,
    Json(request): Json<SweepRequest>,
) -> Result<Json<SweepResponse>, ApiError> {
    let limits = state.limits();
    check_rounds(&request.params, limits)?;
    if request.runs > limits.max_sweep_runs {
        return Err(ApiError::LimitExceeded {
            field: "runs",
            limit: limits.max_sweep_runs as u64,
        });
    }

    let config = request.params.into_config(limits.default_history);
    tracing::info!(game = ?request.game, runs = request.runs, "sweep requested");

    let summary = tokio::task::spawn_blocking(move || match request.game {
        GameSelection::Baccarat => {
            run_sweep(&BaccaratGame, config, request.runs, request.base_seed)
        }
        GameSelection::Market { market } => run_sweep(
            &MarketGame::new(market),
            config,
            request.runs,
            request.base_seed,
        ),
    })
    .await
    .map_err(|_| ApiError::TaskFailed)??;

    Ok(Json(SweepResponse { summary }))
}

async fn list_markets() -> Json<Vec<MarketProfile>> {
    Json(market_catalog())
}
