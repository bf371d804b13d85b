use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use model::entities::user::{self, Role};
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::helpers::staff::insert_staff_user;
use crate::schemas::AppState;
use crate::session::new_session_store;

/// How long a back-office sign-in stays valid.
pub const SESSION_TTL: Duration = Duration::from_secs(8 * 60 * 60);

/// Upper bound on concurrently open sessions.
pub const MAX_SESSIONS: u64 = 10_000;

/// Start-up options of the web server.
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub database_url: String,
    pub bind_address: String,
    /// Drop and recreate all tables on start-up
    pub ephemeral: bool,
    pub admin: Option<AdminSeed>,
}

/// Credentials of an ADMIN account ensured at start-up.
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Open a database connection.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);
    Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))
}

/// Bring the schema up to date.
///
/// In ephemeral mode every table is dropped and recreated, so nothing survives
/// a restart. Otherwise only pending migrations are applied.
pub async fn prepare_schema(db: &DatabaseConnection, ephemeral: bool) -> Result<()> {
    if ephemeral {
        warn!("Ephemeral mode: dropping and recreating all tables");
        Migrator::fresh(db).await.context("Failed to recreate schema")?;
    } else {
        info!("Running database migrations");
        Migrator::up(db, None).await.context("Failed to run migrations")?;
    }
    debug!("Schema ready");
    Ok(())
}

/// Create the start-up ADMIN account unless a user with that name already exists.
pub async fn seed_admin(db: &DatabaseConnection, seed: &AdminSeed) -> Result<()> {
    trace!("Checking for admin account '{}'", seed.username);
    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(seed.username.as_str()))
        .one(db)
        .await?;

    match existing {
        Some(user) => {
            info!("Admin account '{}' already present (ID {})", user.username, user.id);
        }
        None => {
            let user = insert_staff_user(db, &seed.username, &seed.password, Role::Admin).await?;
            info!("Seeded admin account '{}' (ID {})", user.username, user.id);
        }
    }
    Ok(())
}

/// Wrap a ready database in the shared handler state.
pub fn build_app_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        sessions: new_session_store(MAX_SESSIONS, SESSION_TTL),
    }
}

/// Initialize application state: connect, prepare the schema, seed the admin.
pub async fn initialize_app_state(settings: &ServeSettings) -> Result<AppState> {
    let db = connect(&settings.database_url).await?;
    prepare_schema(&db, settings.ephemeral).await?;

    if let Some(seed) = &settings.admin {
        seed_admin(&db, seed).await?;
    } else if settings.ephemeral {
        warn!("No admin account configured; nobody can sign in to an ephemeral store");
    }

    Ok(build_app_state(db))
}
