pub use common::ApiResponse;
use common::{ClientDto, DashboardStats, OrderDto, Receipt};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Open back-office sessions keyed by cookie token
    pub sessions: SessionStore,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::intake::calculate_order,
        crate::handlers::auth::login,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::change_order_status,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::export::export_orders,
    ),
    components(
        schemas(
            ApiResponse<Receipt>,
            ApiResponse<Vec<OrderDto>>,
            ApiResponse<DashboardStats>,
            ErrorResponse,
            HealthResponse,
            Receipt,
            ClientDto,
            OrderDto,
            DashboardStats,
            crate::handlers::auth::LoginForm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "orders", description = "Order intake and the back-office order list"),
        (name = "auth", description = "Staff sign-in"),
        (name = "reports", description = "Dashboard figures and the spreadsheet export"),
    ),
    info(
        title = "Furniture CRM API",
        description = "Order intake and back office of a custom furniture workshop",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
