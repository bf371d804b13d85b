use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::Receipt;
use compute::pricing::quote_raw;
use model::entities::{client, order};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::IntoParams;
use validator::Validate;

use crate::helpers::errors::{compute_error_response, database_error_response, ApiError};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Calculator form fields, sent as a query string
#[derive(Debug, Deserialize, Serialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CalcQuery {
    /// Customer name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Customer phone
    #[validate(length(min = 1, max = 30))]
    pub phone: String,
    /// Customer city
    #[validate(length(min = 1, max = 50))]
    pub city: String,
    /// Width in meters
    pub width: String,
    /// Height in meters
    pub height: String,
    /// One of cabinet, wardrobe, kitchen
    #[serde(rename = "type")]
    pub furniture_type: String,
    /// One of ldsp, mdf, wood
    pub material: String,
}

/// Price an order and record it together with its client
///
/// This is a GET that writes: every repeated or prefetched request records another
/// client and order. The verb stays for compatibility with existing calculator links.
#[utoipa::path(
    get,
    path = "/calc",
    tag = "orders",
    params(CalcQuery),
    responses(
        (status = 200, description = "Order priced and stored", body = ApiResponse<Receipt>),
        (status = 400, description = "Unreadable dimension, unknown material or type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn calculate_order(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<CalcQuery>>,
) -> Result<Json<ApiResponse<Receipt>>, ApiError> {
    trace!("Entering calculate_order function");

    // Nothing is written unless the order can be priced
    let quote = quote_raw(&query.material, &query.furniture_type, &query.width, &query.height)
        .map_err(|e| compute_error_response(&e))?;

    let txn = state
        .db
        .begin()
        .await
        .map_err(|e| database_error_response("Failed to start transaction", &e))?;

    let client = client::ActiveModel {
        name: Set(query.name.clone()),
        phone: Set(query.phone.clone()),
        city: Set(query.city.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| database_error_response("Failed to create client", &e))?;
    info!("Created client with ID: {}", client.id);

    let order = order::ActiveModel {
        width: Set(quote.width),
        height: Set(quote.height),
        material: Set(quote.material.as_str().to_string()),
        furniture_type: Set(quote.furniture_type.as_str().to_string()),
        price: Set(quote.price),
        status: Set(order::OrderStatus::New),
        client_id: Set(client.id),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| database_error_response("Failed to create order", &e))?;

    txn.commit()
        .await
        .map_err(|e| database_error_response("Failed to commit order", &e))?;

    info!(
        "Order {} created for client {}: {} in {}, price {}",
        order.id, client.id, order.furniture_type, order.material, order.price
    );

    // Report what was stored, so the receipt matches /orders and the export
    let receipt = Receipt {
        order_id: order.id,
        client_id: client.id,
        area: quote.area,
        furniture_type: order.furniture_type,
        material: order.material,
        price: order.price,
    };
    debug!("Order area: {}", receipt.area);

    Ok(Json(ApiResponse::ok(receipt, "Order created successfully")))
}
