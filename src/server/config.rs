//! Environment configuration.
//!
//! `dotenvy` loads a `.env` file (if present) in the binary before [`Config::from_env`] is
//! called; everything here reads plain process environment variables.

use crate::server::error::config::ConfigError;

/// Environment variable holding the database connection URL.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable holding the bootstrap administrator email.
pub const ADMIN_ACCOUNT_EMAIL: &str = "ADMIN_ACCOUNT_EMAIL";
/// Environment variable holding the bootstrap administrator password.
pub const ADMIN_ACCOUNT_PASSWORD: &str = "ADMIN_ACCOUNT_PASSWORD";

/// Process configuration.
pub struct Config {
    pub database_url: String,
}

/// Credentials for the administrator account guaranteed by the bootstrap routine.
///
/// Loaded separately from [`Config`]: missing credentials are not fatal to the process, the
/// bootstrap reports them as a failed status instead.
#[derive(Clone, Debug)]
pub struct AdminAccountConfig {
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var(DATABASE_URL)?,
        })
    }
}

impl AdminAccountConfig {
    /// Reads `ADMIN_ACCOUNT_EMAIL` and `ADMIN_ACCOUNT_PASSWORD`.
    ///
    /// # Returns
    /// - `Ok(AdminAccountConfig)` - Both variables are set and non-empty
    /// - `Err(ConfigError::MissingEnvVar)` - Either variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - Email does not look like an email address
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = required_var(ADMIN_ACCOUNT_EMAIL)?;
        let password = required_var(ADMIN_ACCOUNT_PASSWORD)?;

        Self::new(email, password)
    }

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into().trim().to_string();
        let password = password.into();

        if email.is_empty() {
            return Err(ConfigError::MissingEnvVar(ADMIN_ACCOUNT_EMAIL.to_string()));
        }
        if password.is_empty() {
            return Err(ConfigError::MissingEnvVar(ADMIN_ACCOUNT_PASSWORD.to_string()));
        }
        if !email.contains('@') {
            return Err(ConfigError::InvalidEnvValue {
                var: ADMIN_ACCOUNT_EMAIL.to_string(),
                reason: format!("{:?} is not an email address", email),
            });
        }

        Ok(Self { email, password })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}
