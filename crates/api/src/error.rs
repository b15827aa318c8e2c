use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use runtime::{SimulationError, SweepError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidConfig(#[from] SimulationError),
    #[error(transparent)]
    InvalidSweep(SweepError),
    #[error("{field} exceeds the server limit of {limit}")]
    LimitExceeded { field: &'static str, limit: u64 },
    #[error("run id counter exhausted")]
    RunIdOverflow,
    #[error("simulation task failed")]
    TaskFailed,
}

impl From<SweepError> for ApiError {
    fn from(err: SweepError) -> Self {
        match err {
            SweepError::Simulation(inner) => Self::InvalidConfig(inner),
            other => Self::InvalidSweep(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidConfig(_) | Self::InvalidSweep(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::LimitExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::RunIdOverflow | Self::TaskFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
