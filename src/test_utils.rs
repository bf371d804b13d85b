#[cfg(test)]
pub mod test_utils {
    use crate::config::build_app_state;
    use crate::helpers::staff::insert_staff_user;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum_test::TestServer;
    use migration::{Migrator, MigratorTrait};
    use model::entities::user::Role;
    use sea_orm::{Database, DatabaseConnection};
    use tracing_subscriber::EnvFilter;

    pub const TEST_USERNAME: &str = "manager";
    pub const TEST_PASSWORD: &str = "secret";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing, with one MANAGER account to sign in with
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        insert_staff_user(&db, TEST_USERNAME, TEST_PASSWORD, Role::Manager)
            .await
            .expect("Failed to create test user");

        build_app_state(db)
    }

    /// Route test logs through the test harness; level from RUST_LOG, WARN otherwise.
    fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// Create a test server over the full router, plus the state behind it
    pub async fn setup_test_app() -> (TestServer, AppState) {
        init_test_tracing();

        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
        (server, state)
    }
}
