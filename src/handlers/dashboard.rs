use axum::{extract::State, response::Json};
use common::DashboardStats;
use compute::dashboard::summarize;
use model::entities::order;
use sea_orm::EntityTrait;
use tracing::{debug, instrument, trace};

use crate::helpers::errors::{database_error_response, ApiError};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Order counts per status and total revenue
///
/// Unlike `/orders` this route does not require a session.
// TODO: decide whether the dashboard should take CurrentUser like /orders does
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "reports",
    responses(
        (status = 200, description = "Dashboard figures", body = ApiResponse<DashboardStats>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    trace!("Entering get_dashboard function");

    let orders = order::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| database_error_response("Failed to retrieve orders", &e))?;

    let stats = summarize(&orders);
    debug!(
        "Dashboard: {} orders, revenue {}",
        stats.total_orders, stats.total_revenue
    );

    Ok(Json(ApiResponse::ok(stats, "Dashboard retrieved successfully")))
}
