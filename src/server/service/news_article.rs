use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{category::CategoryRepository, news_article::NewsArticleRepository, tag::TagRepository},
    error::{validation::ValidationError, Error},
    model::{
        db::{NewsArticleModel, TagModel},
        news_article::NewsArticleParams,
    },
};

/// Service for managing news articles and their tag associations.
///
/// The article/tag join rows are owned by the article: they are only changed by replacing an
/// article's whole tag set with [`NewsArticleService::set_tags`], never one row at a time.
pub struct NewsArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsArticleService<'a> {
    /// Creates a new instance of [`NewsArticleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_article(&self, id: i32) -> Result<Option<NewsArticleModel>, Error> {
        Ok(NewsArticleRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all_articles(&self) -> Result<Vec<NewsArticleModel>, Error> {
        Ok(NewsArticleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_articles_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<NewsArticleModel>, Error> {
        Ok(NewsArticleRepository::new(self.db)
            .get_by_category_id(category_id)
            .await?)
    }

    /// Retrieves the tags of an article
    ///
    /// # Returns
    /// - `Ok(Some(Vec<TagModel>))` - Article found, tags ordered by name
    /// - `Ok(None)` - Article does not exist
    pub async fn get_article_tags(&self, id: i32) -> Result<Option<Vec<TagModel>>, Error> {
        let article_repo = NewsArticleRepository::new(self.db);

        let Some(article) = article_repo.get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(article_repo.get_tags(&article).await?))
    }

    /// Creates an article filed under an existing category
    ///
    /// # Returns
    /// - `Ok(NewsArticleModel)` - Article created
    /// - `Err(Error::ValidationError(CategoryNotFound))` - Category does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_article(
        &self,
        params: NewsArticleParams,
    ) -> Result<NewsArticleModel, Error> {
        if !CategoryRepository::new(self.db)
            .exists(params.category_id)
            .await?
        {
            return Err(ValidationError::CategoryNotFound(params.category_id).into());
        }

        let article = NewsArticleRepository::new(self.db).create(params).await?;

        tracing::debug!(
            article_id = article.id,
            category_id = article.category_id,
            "Created news article"
        );

        Ok(article)
    }

    /// Updates an article, which may move it to another existing category
    ///
    /// # Returns
    /// - `Ok(Some(NewsArticleModel))` - Article updated
    /// - `Ok(None)` - Article does not exist
    /// - `Err(Error::ValidationError(CategoryNotFound))` - Category does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_article(
        &self,
        id: i32,
        params: NewsArticleParams,
    ) -> Result<Option<NewsArticleModel>, Error> {
        if !CategoryRepository::new(self.db)
            .exists(params.category_id)
            .await?
        {
            return Err(ValidationError::CategoryNotFound(params.category_id).into());
        }

        Ok(NewsArticleRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes an article together with its tag associations in one transaction
    ///
    /// # Returns
    /// - `Ok(true)` - Article deleted
    /// - `Ok(false)` - Article did not exist
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_article(&self, id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let article_repo = NewsArticleRepository::new(&txn);

        article_repo.delete_all_tag_ids(id).await?;
        let result = article_repo.delete(id).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the full tag set of an article
    ///
    /// Join rows for tags outside `tag_ids` are removed and rows for tags in `tag_ids` not yet
    /// associated are added; rows already present are left untouched, so calling this twice
    /// with the same set is a no-op the second time. Validation and both mutations run in one
    /// transaction: on any error nothing changes.
    ///
    /// # Arguments
    /// - `id` - ID of the article
    /// - `tag_ids` - Complete set of tag IDs the article should carry, may be empty
    ///
    /// # Returns
    /// - `Ok(())` - Association set now equals `tag_ids`
    /// - `Err(Error::ValidationError(ArticleNotFound))` - Article does not exist
    /// - `Err(Error::ValidationError(TagsNotFound))` - Some tag IDs do not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_tags(&self, id: i32, tag_ids: &HashSet<i32>) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let article_repo = NewsArticleRepository::new(&txn);
        let tag_repo = TagRepository::new(&txn);

        if !article_repo.exists(id).await? {
            return Err(ValidationError::ArticleNotFound(id).into());
        }

        let existing_tag_ids = tag_repo.get_existing_ids(tag_ids).await?;
        if existing_tag_ids.len() != tag_ids.len() {
            let mut missing: Vec<i32> = tag_ids.difference(&existing_tag_ids).copied().collect();
            missing.sort_unstable();

            return Err(ValidationError::TagsNotFound(missing).into());
        }

        let current_tag_ids = article_repo.get_tag_ids(id).await?;
        let to_remove: HashSet<i32> = current_tag_ids.difference(tag_ids).copied().collect();
        let to_add: HashSet<i32> = tag_ids.difference(&current_tag_ids).copied().collect();

        article_repo.delete_tag_ids(id, &to_remove).await?;
        article_repo.insert_tag_ids(id, &to_add).await?;

        txn.commit().await?;

        tracing::debug!(
            article_id = id,
            added = to_add.len(),
            removed = to_remove.len(),
            "Replaced news article tags"
        );

        Ok(())
    }
}
