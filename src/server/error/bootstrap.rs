use crate::server::error::{config::ConfigError, Error};

/// Reason the administrator bootstrap did not complete.
///
/// Bootstrap failures are never propagated as `Err`; they are reported through
/// [`BootstrapStatus::Failed`](crate::server::startup::BootstrapStatus::Failed) so the process
/// keeps serving non-administrative functionality.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    /// Admin credentials are not configured.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Schema creation failed.
    #[error("Failed to ensure database schema: {0}")]
    SchemaError(sea_orm::DbErr),
    /// Looking up or inserting the administrator account failed.
    #[error("Failed to provision administrator account: {0}")]
    ProvisionError(#[from] Error),
}
