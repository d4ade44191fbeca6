use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Account IDs are assigned by the application, never by the database
        manager
            .create_table(
                Table::create()
                    .table(SystemAccount::Table)
                    .if_not_exists()
                    .col(small_integer(SystemAccount::AccountId).primary_key().take())
                    .col(string(SystemAccount::Name))
                    .col(string_uniq(SystemAccount::Email))
                    .col(string(SystemAccount::Password))
                    .col(small_integer(SystemAccount::Role))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SystemAccount {
    Table,
    AccountId,
    Name,
    Email,
    Password,
    Role,
}
