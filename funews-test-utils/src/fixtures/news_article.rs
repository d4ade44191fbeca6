use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn article<'a>(&'a self) -> NewsArticleFixtures<'a> {
        NewsArticleFixtures { setup: self }
    }
}

pub struct NewsArticleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> NewsArticleFixtures<'a> {
    pub async fn insert_article(
        &self,
        category_id: i32,
    ) -> Result<entity::news_article::Model, TestError> {
        Ok(
            entity::prelude::NewsArticle::insert(entity::news_article::ActiveModel {
                title: ActiveValue::Set("Test Article".to_string()),
                headline: ActiveValue::Set("Test headline".to_string()),
                content: ActiveValue::Set("Test content".to_string()),
                source: ActiveValue::Set(None),
                category_id: ActiveValue::Set(category_id),
                status: ActiveValue::Set(true),
                created_by_id: ActiveValue::Set(None),
                updated_by_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                modified_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a join row directly, bypassing the service layer.
    pub async fn insert_news_tag(
        &self,
        news_article_id: i32,
        tag_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::NewsTag::insert(entity::news_tag::ActiveModel {
            news_article_id: ActiveValue::Set(news_article_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Returns all join rows of an article ordered by tag ID.
    pub async fn get_news_tags(
        &self,
        news_article_id: i32,
    ) -> Result<Vec<entity::news_tag::Model>, TestError> {
        Ok(entity::prelude::NewsTag::find()
            .filter(entity::news_tag::Column::NewsArticleId.eq(news_article_id))
            .order_by_asc(entity::news_tag::Column::TagId)
            .all(&self.setup.db)
            .await?)
    }
}
