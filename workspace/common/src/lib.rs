//! Common transport-layer types shared between the HTTP handlers, the
//! compute crate and the integration tests, so response shapes are defined once.

mod dashboard;
mod orders;

pub use dashboard::DashboardStats;
pub use orders::{ClientDto, OrderDto, Receipt};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by every JSON endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a successful response.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
