use axum::{Json, http::StatusCode};
use compute::ComputeError;
use sea_orm::DbErr;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error half of every JSON handler's result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Input problems become 400, everything else 500.
pub fn compute_error_response(err: &ComputeError) -> ApiError {
    let status = if err.is_client_error() {
        warn!("Rejected request: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        error!("Computation failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, err.code(), err.to_string())
}

pub fn database_error_response(context: &str, err: &DbErr) -> ApiError {
    error!("{}: {}", context, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", context)
}
