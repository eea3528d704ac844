use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    service::user::UserService,
};
use sea_orm::DatabaseConnection;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for upstream requests.
///
/// Every request made through it is bounded by the configured upstream timeout.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .user_agent(concat!("movie-catalog/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(InternalError::HttpClient)?;

    Ok(client)
}

/// Creates the configured bootstrap admin if no admin exists yet.
///
/// Does nothing unless both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::debug!("No bootstrap admin configured");
        return Ok(());
    };

    let service = UserService::new(db);

    if let Some(admin) = service.ensure_bootstrap_admin(email, password).await? {
        tracing::info!("Created bootstrap admin {} ({})", admin.id, admin.email);
    }

    Ok(())
}
