use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::system_account::SystemAccountRepository, error::Error, model::db::SystemAccountModel,
};

/// Service for reading system accounts.
///
/// Accounts are created by the registration flow or the startup bootstrap and are never
/// deleted here.
pub struct SystemAccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemAccountService<'a> {
    /// Creates a new instance of [`SystemAccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_account(
        &self,
        account_id: i16,
    ) -> Result<Option<SystemAccountModel>, Error> {
        Ok(SystemAccountRepository::new(self.db)
            .get_by_id(account_id)
            .await?)
    }

    pub async fn get_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SystemAccountModel>, Error> {
        Ok(SystemAccountRepository::new(self.db)
            .get_by_email(email)
            .await?)
    }

    pub async fn get_all_accounts(&self) -> Result<Vec<SystemAccountModel>, Error> {
        Ok(SystemAccountRepository::new(self.db).get_all().await?)
    }

    /// Looks up the account matching a login email & password
    ///
    /// Issuing the session and claims for the returned account is left to the caller.
    ///
    /// # Returns
    /// - `Ok(Some(SystemAccountModel))` - Credentials match
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SystemAccountModel>, Error> {
        let account = SystemAccountRepository::new(self.db)
            .get_by_email(email.trim())
            .await?;

        match account {
            Some(account) if account.password == password => Ok(Some(account)),
            Some(account) => {
                tracing::debug!(
                    account_id = account.account_id,
                    "Rejected login, wrong password"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
