//! Error types for the FUNews server library.
//!
//! This module provides the error taxonomy shared by repositories, services and the startup
//! routine. Domain-specific errors live in their own submodules (validation, conflict,
//! configuration) and are aggregated into the top-level [`Error`] using `thiserror`'s
//! `#[from]` conversions so they can be propagated with the `?` operator.
//!
//! Lookups that find nothing are not errors: repositories and services return `Ok(None)`
//! so callers can distinguish an absent record from a failed query.

pub mod bootstrap;
pub mod config;
pub mod conflict;
pub mod validation;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, conflict::ConflictError, validation::ValidationError,
};

/// Main error type for the FUNews server library.
///
/// # Error Categories
/// - Validation errors (a referenced record does not exist, detected before any mutation)
/// - Conflict errors (a business invariant would be violated by the mutation)
/// - Configuration errors (missing/invalid environment variables)
/// - Storage errors (the database failed for a reason not checked up front)
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed reference detected before any mutation was attempted.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested mutation would violate a business invariant.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Internal error indicating a bug in FUNews's code.
    ///
    /// This error should never occur in normal operation.
    #[error("Internal error with FUNews's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, timeouts).
    #[error(transparent)]
    DbErr(DbErr),
}

/// Translates storage errors into the application taxonomy.
///
/// Unique and foreign key violations are the storage-level backstop for checks the services
/// already perform, so they surface as [`ConflictError::Constraint`] rather than leaking the
/// driver's error shape. Every other database error is kept as [`Error::DbErr`].
impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                Error::ConflictError(ConflictError::Constraint(message))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Error::ConflictError(ConflictError::Constraint(message))
            }
            _ => Error::DbErr(err),
        }
    }
}
