use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct SystemAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SystemAccountRepository<'a, C> {
    /// Creates a new instance of [`SystemAccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account with an explicitly assigned account ID
    pub async fn create(
        &self,
        account_id: i16,
        name: &str,
        email: &str,
        password: &str,
        role: i16,
    ) -> Result<entity::system_account::Model, DbErr> {
        let account = entity::system_account::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            role: ActiveValue::Set(role),
        };

        account.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        account_id: i16,
    ) -> Result<Option<entity::system_account::Model>, DbErr> {
        entity::prelude::SystemAccount::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::system_account::Model>, DbErr> {
        entity::prelude::SystemAccount::find()
            .filter(entity::system_account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::system_account::Model>, DbErr> {
        entity::prelude::SystemAccount::find()
            .order_by_asc(entity::system_account::Column::AccountId)
            .all(self.db)
            .await
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SystemAccount::find()
            .filter(entity::system_account::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Highest assigned account ID, `None` when no accounts exist
    pub async fn max_account_id(&self) -> Result<Option<i16>, DbErr> {
        let max_id = entity::prelude::SystemAccount::find()
            .select_only()
            .column_as(entity::system_account::Column::AccountId.max(), "max_id")
            .into_tuple::<Option<i16>>()
            .one(self.db)
            .await?;

        Ok(max_id.flatten())
    }
}
