//! Process startup: database connection and the administrator bootstrap.
//!
//! The bootstrap runs once per process start. It ensures the schema exists and that an
//! administrator account with the configured email exists. It never returns `Err` and never
//! panics: every failure is logged and reported as [`BootstrapStatus::Failed`] so the process
//! can keep serving non-administrative functionality.

use dioxus_logger::tracing;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    auth::AccountRole,
    config::{AdminAccountConfig, Config},
    data::system_account::SystemAccountRepository,
    error::{
        bootstrap::BootstrapError, config::ConfigError, conflict::ConflictError, Error,
    },
    model::db::SystemAccountModel,
};

/// Display name given to an administrator account created by the bootstrap.
pub const ADMIN_ACCOUNT_NAME: &str = "System Administrator";

/// Outcome of [`bootstrap`].
#[derive(Debug)]
pub enum BootstrapStatus {
    /// No account used the configured email; an administrator was created.
    Created(SystemAccountModel),
    /// An account with the configured email already exists; nothing was changed.
    AlreadyProvisioned,
    /// Bootstrap did not complete. Already logged.
    Failed(BootstrapError),
}

impl BootstrapStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Create any missing tables by applying pending migrations
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await
}

/// Inserts an administrator for the configured email unless an account already uses it
///
/// Runs in one transaction: the new account ID is `max(account_id) + 1`, or `1` for an
/// empty table. Two processes racing here are serialized by the primary key and unique email
/// constraints; the loser gets `ConflictError::Constraint` and inserts nothing.
///
/// # Returns
/// - `Ok(Some(SystemAccountModel))` - Administrator created
/// - `Ok(None)` - An account with this email already exists
/// - `Err(Error::ConflictError(AccountIdExhausted))` - No account ID left to assign
/// - `Err(Error)` - Query or insert failed, nothing was written
pub async fn provision_admin(
    db: &DatabaseConnection,
    admin: &AdminAccountConfig,
) -> Result<Option<SystemAccountModel>, Error> {
    let txn = db.begin().await?;
    let account_repo = SystemAccountRepository::new(&txn);

    if account_repo.exists_by_email(&admin.email).await? {
        return Ok(None);
    }

    let account_id = match account_repo.max_account_id().await? {
        Some(max_id) => max_id
            .checked_add(1)
            .ok_or(ConflictError::AccountIdExhausted(max_id))?,
        None => 1,
    };

    let account = account_repo
        .create(
            account_id,
            ADMIN_ACCOUNT_NAME,
            &admin.email,
            &admin.password,
            AccountRole::Admin.value(),
        )
        .await?;

    txn.commit().await?;

    Ok(Some(account))
}

/// Ensure the schema exists and an administrator account is provisioned
///
/// # Arguments
/// - `db` - Database connection
/// - `admin` - Administrator credentials as loaded from configuration; a configuration error
///   is reported as a failed bootstrap after the schema has been ensured
pub async fn bootstrap(
    db: &DatabaseConnection,
    admin: Result<AdminAccountConfig, ConfigError>,
) -> BootstrapStatus {
    if let Err(err) = ensure_schema(db).await {
        return failed(BootstrapError::SchemaError(err));
    }

    match admin {
        Ok(admin) => provision(db, &admin).await,
        Err(err) => failed(err.into()),
    }
}

async fn provision(db: &DatabaseConnection, admin: &AdminAccountConfig) -> BootstrapStatus {
    tracing::info!(email = %admin.email, "Checking for admin account");

    match provision_admin(db, admin).await {
        Ok(Some(account)) => {
            tracing::info!(
                account_id = account.account_id,
                "Admin account created successfully"
            );
            BootstrapStatus::Created(account)
        }
        Ok(None) => {
            tracing::info!("Admin account already exists");
            BootstrapStatus::AlreadyProvisioned
        }
        Err(err) => failed(err.into()),
    }
}

fn failed(err: BootstrapError) -> BootstrapStatus {
    tracing::error!("An error occurred while initializing the database: {}", err);

    BootstrapStatus::Failed(err)
}
