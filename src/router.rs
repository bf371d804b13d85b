use crate::handlers::{
    auth::{login, login_form, logout},
    dashboard::get_dashboard,
    export::export_orders,
    health::health_check,
    intake::calculate_order,
    orders::{change_order_status, list_orders},
    pages::landing,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Public pages and intake
        .route("/", get(landing))
        .route("/calc", get(calculate_order))
        // Staff sign-in
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        // Back office
        .route("/orders", get(list_orders))
        .route("/order/:order_id/status/:status", get(change_order_status))
        .route("/dashboard", get(get_dashboard))
        .route("/export", get(export_orders))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
