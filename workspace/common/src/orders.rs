use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned after an order has been priced and stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Receipt {
    pub order_id: i32,
    pub client_id: i32,
    pub furniture_type: String,
    pub material: String,
    /// Width multiplied by height, in square meters
    #[schema(value_type = String, example = "3.0")]
    pub area: Decimal,
    #[schema(value_type = String, example = "900.00")]
    pub price: Decimal,
}

/// Client details shown next to an order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub city: String,
}

/// One row of the back-office order list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub width: Decimal,
    #[schema(value_type = String)]
    pub height: Decimal,
    pub material: String,
    pub furniture_type: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    /// One of NEW, IN_WORK, PRODUCTION, DONE
    pub status: String,
    pub client_id: i32,
    /// Missing when the referenced client row no longer exists
    pub client: Option<ClientDto>,
}
