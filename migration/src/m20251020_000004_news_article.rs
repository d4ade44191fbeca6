use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_system_account::SystemAccount, m20251020_000002_category::Category,
};

static IDX_NEWS_ARTICLE_CATEGORY_ID: &str = "idx-news_article-category_id";
static FK_NEWS_ARTICLE_CATEGORY_ID: &str = "fk-news_article-category_id";
static FK_NEWS_ARTICLE_CREATED_BY_ID: &str = "fk-news_article-created_by_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsArticle::Id))
                    .col(string(NewsArticle::Title))
                    .col(string(NewsArticle::Headline))
                    .col(text(NewsArticle::Content))
                    .col(string_null(NewsArticle::Source))
                    .col(integer(NewsArticle::CategoryId))
                    .col(boolean(NewsArticle::Status))
                    .col(small_integer_null(NewsArticle::CreatedById))
                    .col(small_integer_null(NewsArticle::UpdatedById))
                    .col(timestamp(NewsArticle::CreatedAt))
                    .col(timestamp_null(NewsArticle::ModifiedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_ARTICLE_CATEGORY_ID)
                            .from(NewsArticle::Table, NewsArticle::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_ARTICLE_CREATED_BY_ID)
                            .from(NewsArticle::Table, NewsArticle::CreatedById)
                            .to(SystemAccount::Table, SystemAccount::AccountId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NEWS_ARTICLE_CATEGORY_ID)
                    .table(NewsArticle::Table)
                    .col(NewsArticle::CategoryId)
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
                    .name(IDX_NEWS_ARTICLE_CATEGORY_ID)
                    .table(NewsArticle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NewsArticle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NewsArticle {
    Table,
    Id,
    Title,
    Headline,
    Content,
    Source,
    CategoryId,
    Status,
    CreatedById,
    UpdatedById,
    CreatedAt,
    ModifiedAt,
}
