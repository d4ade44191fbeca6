use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AccountFixtures<'a> {
    pub async fn insert_account(
        &self,
        account_id: i16,
        email: &str,
        role: i16,
    ) -> Result<entity::system_account::Model, TestError> {
        Ok(
            entity::prelude::SystemAccount::insert(entity::system_account::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                name: ActiveValue::Set(format!("Account {}", account_id)),
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set("password".to_string()),
                role: ActiveValue::Set(role),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
