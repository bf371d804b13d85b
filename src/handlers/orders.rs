use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use common::{ClientDto, OrderDto};
use compute::{workflow::parse_status, ComputeError};
use model::entities::{client, order};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::{debug, info, instrument, trace, warn};

use crate::helpers::errors::{
    compute_error_response, database_error_response, error_response, ApiError,
};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use crate::session::CurrentUser;

fn to_order_dto(order: order::Model, client: Option<client::Model>) -> OrderDto {
    OrderDto {
        id: order.id,
        width: order.width,
        height: order.height,
        material: order.material,
        furniture_type: order.furniture_type,
        price: order.price,
        status: order.status.as_str().to_string(),
        client_id: order.client_id,
        client: client.map(|c| ClientDto {
            id: c.id,
            name: c.name,
            phone: c.phone,
            city: c.city,
        }),
    }
}

/// List every order with its client, oldest first
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Orders retrieved successfully", body = ApiResponse<Vec<OrderDto>>),
        (status = 303, description = "Not signed in, redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_orders(
    CurrentUser(identity): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OrderDto>>>, ApiError> {
    trace!("Entering list_orders function");
    debug!("Listing orders for {} ({:?})", identity.username, identity.role);

    let rows = order::Entity::find()
        .find_also_related(client::Entity)
        .order_by_asc(order::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| database_error_response("Failed to retrieve orders", &e))?;

    info!("Retrieved {} orders", rows.len());
    let orders = rows
        .into_iter()
        .map(|(order, client)| to_order_dto(order, client))
        .collect();

    Ok(Json(ApiResponse::ok(orders, "Orders retrieved successfully")))
}

/// Move an order to another status
///
/// Any status may follow any other. Like `/calc` this is a GET with a side effect:
/// opening the URL directly, a browser prefetch or a crawler changes the status.
/// No sign-in is required. An ID that is not an integer is treated as an unknown
/// order.
#[utoipa::path(
    get,
    path = "/order/{order_id}/status/{status}",
    tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("status" = String, Path, description = "One of NEW, IN_WORK, PRODUCTION, DONE")
    ),
    responses(
        (status = 303, description = "Status changed, redirect to /orders"),
        (status = 200, description = "Status rejected, plain text `Invalid status`", body = String),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn change_order_status(
    State(state): State<AppState>,
    Path((raw_id, status)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    trace!("Entering change_order_status function");

    let not_found = || error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Order not found");

    let order_id: i32 = raw_id.parse().map_err(|_| {
        warn!("Order ID '{}' is not a number", raw_id);
        not_found()
    })?;

    let order = order::Entity::find_by_id(order_id)
        .one(&state.db)
        .await
        .map_err(|e| database_error_response("Failed to retrieve order", &e))?
        .ok_or_else(|| {
            warn!("Order with ID {} not found", order_id);
            not_found()
        })?;

    let new_status = match parse_status(&status) {
        Ok(new_status) => new_status,
        Err(ComputeError::InvalidStatus(label)) => {
            warn!("Rejected status '{}' for order {}", label, order_id);
            return Ok("Invalid status".into_response());
        }
        Err(other) => return Err(compute_error_response(&other)),
    };

    let previous = order.status;
    let mut active: order::ActiveModel = order.into();
    active.status = Set(new_status);
    active
        .update(&state.db)
        .await
        .map_err(|e| database_error_response("Failed to update order status", &e))?;

    info!(
        "Order {} moved from {} to {}",
        order_id,
        previous.as_str(),
        new_status.as_str()
    );
    Ok(Redirect::to("/orders").into_response())
}
