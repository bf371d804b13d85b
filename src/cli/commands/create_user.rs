use anyhow::Result;
use model::entities::user::Role;
use tracing::{info, trace};

use crate::config::connect;
use crate::helpers::staff::insert_staff_user;

pub async fn create_user(database_url: &str, username: &str, password: &str, role: Role) -> Result<()> {
    trace!("Entering create_user function");

    let db = connect(database_url).await?;
    let user = insert_staff_user(&db, username, password, role).await?;

    info!("Created user '{}' with ID {} and role {:?}", user.username, user.id, user.role);
    Ok(())
}
