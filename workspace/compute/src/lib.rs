//! Domain logic of the workshop order book: pricing, the status pipeline,
//! dashboard figures and the spreadsheet export. Nothing in here touches the
//! database; callers load models and hand them over.

pub mod dashboard;
pub mod error;
pub mod export;
pub mod pricing;
pub mod workflow;
pub mod xlsx;

pub use error::{ComputeError, Result};
pub use pricing::{FurnitureType, Material, Quote};
