use anyhow::Result;
use tracing::{info, trace};

use crate::config::{connect, prepare_schema};

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");

    let db = connect(database_url).await?;
    prepare_schema(&db, false).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}
