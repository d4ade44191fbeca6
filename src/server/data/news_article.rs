use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::news_article::NewsArticleParams;

pub struct NewsArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsArticleRepository<'a, C> {
    /// Creates a new instance of [`NewsArticleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new news article with `created_at` set to now
    pub async fn create(
        &self,
        params: NewsArticleParams,
    ) -> Result<entity::news_article::Model, DbErr> {
        let article = entity::news_article::ActiveModel {
            title: ActiveValue::Set(params.title),
            headline: ActiveValue::Set(params.headline),
            content: ActiveValue::Set(params.content),
            source: ActiveValue::Set(params.source),
            category_id: ActiveValue::Set(params.category_id),
            status: ActiveValue::Set(params.status),
            created_by_id: ActiveValue::Set(params.account_id),
            updated_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            modified_at: ActiveValue::Set(None),
            ..Default::default()
        };

        article.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::news_article::Model>, DbErr> {
        entity::prelude::NewsArticle::find_by_id(id)
            .one(self.db)
            .await
    }

    /// All articles, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::news_article::Model>, DbErr> {
        entity::prelude::NewsArticle::find()
            .order_by_desc(entity::news_article::Column::CreatedAt)
            .order_by_desc(entity::news_article::Column::Id)
            .all(self.db)
            .await
    }

    /// Articles filed directly under a category, newest first
    pub async fn get_by_category_id(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::news_article::Model>, DbErr> {
        entity::prelude::NewsArticle::find()
            .filter(entity::news_article::Column::CategoryId.eq(category_id))
            .order_by_desc(entity::news_article::Column::CreatedAt)
            .order_by_desc(entity::news_article::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates an existing article with `modified_at` set to now
    ///
    /// Returns `Ok(None)` if the article does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: NewsArticleParams,
    ) -> Result<Option<entity::news_article::Model>, DbErr> {
        let article = match entity::prelude::NewsArticle::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(article) => article,
            None => return Ok(None),
        };

        let mut article_am = article.into_active_model();
        article_am.title = ActiveValue::Set(params.title);
        article_am.headline = ActiveValue::Set(params.headline);
        article_am.content = ActiveValue::Set(params.content);
        article_am.source = ActiveValue::Set(params.source);
        article_am.category_id = ActiveValue::Set(params.category_id);
        article_am.status = ActiveValue::Set(params.status);
        article_am.updated_by_id = ActiveValue::Set(params.account_id);
        article_am.modified_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let article = article_am.update(self.db).await?;

        Ok(Some(article))
    }

    /// Deletes an article
    ///
    /// Join rows must be removed first with [`Self::delete_tag_ids`] or the foreign key
    /// constraint rejects the delete.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::NewsArticle::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::NewsArticle::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Tags associated with an article, ordered by name
    pub async fn get_tags(
        &self,
        article: &entity::news_article::Model,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        article
            .find_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// IDs of the tags currently associated with an article
    pub async fn get_tag_ids(&self, id: i32) -> Result<HashSet<i32>, DbErr> {
        let tag_ids = entity::prelude::NewsTag::find()
            .select_only()
            .column(entity::news_tag::Column::TagId)
            .filter(entity::news_tag::Column::NewsArticleId.eq(id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(tag_ids.into_iter().collect())
    }

    /// Associates tags with an article
    ///
    /// Callers must pass only tag IDs not yet associated; a duplicate pair violates the
    /// composite primary key.
    pub async fn insert_tag_ids(&self, id: i32, tag_ids: &HashSet<i32>) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let news_tags = tag_ids
            .iter()
            .map(|&tag_id| entity::news_tag::ActiveModel {
                news_article_id: ActiveValue::Set(id),
                tag_id: ActiveValue::Set(tag_id),
            });

        entity::prelude::NewsTag::insert_many(news_tags)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes the given tag associations of an article
    ///
    /// Returns the number of join rows removed.
    pub async fn delete_tag_ids(&self, id: i32, tag_ids: &HashSet<i32>) -> Result<u64, DbErr> {
        if tag_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::NewsTag::delete_many()
            .filter(entity::news_tag::Column::NewsArticleId.eq(id))
            .filter(entity::news_tag::Column::TagId.is_in(tag_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every tag association of an article
    pub async fn delete_all_tag_ids(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::NewsTag::delete_many()
            .filter(entity::news_tag::Column::NewsArticleId.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
