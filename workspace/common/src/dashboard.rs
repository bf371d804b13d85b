use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate figures for the back-office dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardStats {
    pub total_orders: u64,
    /// Sum of all order prices, zero when there are no orders
    #[schema(value_type = String, example = "0")]
    pub total_revenue: Decimal,
    pub new_count: u64,
    pub in_work_count: u64,
    pub production_count: u64,
    pub done_count: u64,
}
