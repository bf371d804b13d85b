use rust_decimal::Decimal;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Width or height could not be read as a number
    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidDimension { field: &'static str, value: String },

    /// Material is missing from the price table
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Furniture type is missing from the coefficient table
    #[error("Unknown furniture type: {0}")]
    UnknownFurnitureType(String),

    /// Dimensions so large the price no longer fits a decimal
    #[error("Price out of range for {width} x {height}")]
    PriceOverflow { width: Decimal, height: Decimal },

    /// Status label outside NEW, IN_WORK, PRODUCTION, DONE
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// An order whose client row is gone
    #[error("Order {order_id} references missing client {client_id}")]
    OrphanOrder { order_id: i32, client_id: i32 },

    /// Failure while assembling the xlsx archive
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

impl ComputeError {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ComputeError::InvalidDimension { .. } => "INVALID_DIMENSION",
            ComputeError::UnknownMaterial(_) => "UNKNOWN_MATERIAL",
            ComputeError::UnknownFurnitureType(_) => "UNKNOWN_FURNITURE_TYPE",
            ComputeError::PriceOverflow { .. } => "PRICE_OVERFLOW",
            ComputeError::InvalidStatus(_) => "INVALID_STATUS",
            ComputeError::OrphanOrder { .. } => "ORPHAN_ORDER",
            ComputeError::Spreadsheet(_) => "SPREADSHEET_ERROR",
        }
    }

    /// Whether the error was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ComputeError::InvalidDimension { .. }
                | ComputeError::UnknownMaterial(_)
                | ComputeError::UnknownFurnitureType(_)
                | ComputeError::PriceOverflow { .. }
                | ComputeError::InvalidStatus(_)
        )
    }
}

impl From<zip::result::ZipError> for ComputeError {
    fn from(error: zip::result::ZipError) -> Self {
        let err = ComputeError::Spreadsheet(format!("Archive error: {}", error));
        error!(?err, "Spreadsheet error: archive");
        err
    }
}

impl From<std::io::Error> for ComputeError {
    fn from(error: std::io::Error) -> Self {
        let err = ComputeError::Spreadsheet(format!("Write error: {}", error));
        error!(?err, "Spreadsheet error: write");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
