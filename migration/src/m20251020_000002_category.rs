use sea_orm_migration::{prelude::*, schema::*};

static IDX_CATEGORY_PARENT_ID: &str = "idx-category-parent_id";
static FK_CATEGORY_PARENT_ID: &str = "fk-category-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .col(string(Category::Description))
                    .col(integer_null(Category::ParentId))
                    .col(boolean(Category::IsActive).default(true).take())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CATEGORY_PARENT_ID)
                            .from(Category::Table, Category::ParentId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATEGORY_PARENT_ID)
                    .table(Category::Table)
                    .col(Category::ParentId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATEGORY_PARENT_ID)
                    .table(Category::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    Description,
    ParentId,
    IsActive,
}
