use axum::{extract::State, http::header, response::IntoResponse};
use compute::export::{orders_workbook, CONTENT_TYPE, FILE_NAME};
use model::entities::{client, order};
use sea_orm::{EntityTrait, QueryOrder};
use tracing::{info, instrument, trace};

use crate::helpers::errors::{compute_error_response, database_error_response, ApiError};
use crate::schemas::{AppState, ErrorResponse};

/// Download all orders as an xlsx workbook
///
/// One row per order, ascending by ID. An order whose client row is missing
/// aborts the whole export.
#[utoipa::path(
    get,
    path = "/export",
    tag = "reports",
    responses(
        (status = 200, description = "Spreadsheet attachment", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", body = Vec<u8>),
        (status = 500, description = "Orphaned order or internal error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn export_orders(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    trace!("Entering export_orders function");

    let rows = order::Entity::find()
        .find_also_related(client::Entity)
        .order_by_asc(order::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| database_error_response("Failed to retrieve orders", &e))?;

    let bytes = orders_workbook(&rows).map_err(|e| compute_error_response(&e))?;
    info!("Exported {} orders ({} bytes)", rows.len(), bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", FILE_NAME),
            ),
        ],
        bytes,
    ))
}
