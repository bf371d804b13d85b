//! The order status pipeline. Labels are a flat set: any status can be set
//! from any other, there is no forward-only rule.

use model::entities::order::OrderStatus;
use sea_orm::Iterable;
use tracing::debug;

use crate::error::{ComputeError, Result};

/// Resolve a status label (exact, upper-case) to an [`OrderStatus`].
pub fn parse_status(raw: &str) -> Result<OrderStatus> {
    OrderStatus::iter()
        .find(|status| status.as_str() == raw)
        .ok_or_else(|| {
            debug!("Status '{}' is not in the allowed set", raw);
            ComputeError::InvalidStatus(raw.to_string())
        })
}
