use anyhow::{Context, Result};
use model::entities::user::{self, Role};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::debug;

use super::passwords::hash_password;

/// Store a new staff account with a freshly hashed password.
pub async fn insert_staff_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    role: Role,
) -> Result<user::Model> {
    debug!("Creating staff user '{}' with role {:?}", username, role);
    let password_hash = hash_password(password)?;

    user::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(password_hash),
        role: Set(role),
        ..Default::default()
    }
    .insert(db)
    .await
    .with_context(|| format!("Failed to create user '{}'", username))
}
