use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000003_tag::Tag, m20251020_000004_news_article::NewsArticle};

static IDX_NEWS_TAG_TAG_ID: &str = "idx-news_tag-tag_id";
static FK_NEWS_TAG_NEWS_ARTICLE_ID: &str = "fk-news_tag-news_article_id";
static FK_NEWS_TAG_TAG_ID: &str = "fk-news_tag-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsTag::Table)
                    .if_not_exists()
                    .col(integer(NewsTag::NewsArticleId))
                    .col(integer(NewsTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(NewsTag::NewsArticleId)
                            .col(NewsTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_TAG_NEWS_ARTICLE_ID)
                            .from(NewsTag::Table, NewsTag::NewsArticleId)
                            .to(NewsArticle::Table, NewsArticle::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_TAG_TAG_ID)
                            .from(NewsTag::Table, NewsTag::TagId)
                            .to(Tag::Table, Tag::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NEWS_TAG_TAG_ID)
                    .table(NewsTag::Table)
                    .col(NewsTag::TagId)
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
                    .name(IDX_NEWS_TAG_TAG_ID)
                    .table(NewsTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NewsTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum NewsTag {
    Table,
    NewsArticleId,
    TagId,
}
