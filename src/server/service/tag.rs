use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::tag::TagRepository,
    error::{conflict::ConflictError, Error},
    model::{db::TagModel, tag::TagParams},
};

/// Service for managing tags.
///
/// Tag names are unique ignoring case. The check runs before every insert or rename; the
/// unique `name_key` column remains the backstop for concurrent requests.
pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    /// Creates a new instance of [`TagService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_tag(&self, id: i32) -> Result<Option<TagModel>, Error> {
        Ok(TagRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all_tags(&self) -> Result<Vec<TagModel>, Error> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    /// Creates a tag with a name no other tag holds
    ///
    /// # Returns
    /// - `Ok(TagModel)` - Tag created
    /// - `Err(Error::ConflictError(DuplicateTagName))` - Name already taken, ignoring case
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_tag(&self, params: TagParams) -> Result<TagModel, Error> {
        let tag_repo = TagRepository::new(self.db);

        if tag_repo.exists_by_name(&params.name).await? {
            return Err(ConflictError::DuplicateTagName(params.name).into());
        }

        let tag = tag_repo.create(params).await?;

        tracing::debug!(tag_id = tag.id, name = %tag.name, "Created tag");

        Ok(tag)
    }

    /// Updates a tag, keeping its name unique
    ///
    /// Renaming a tag to a different casing of its own name is allowed.
    ///
    /// # Returns
    /// - `Ok(Some(TagModel))` - Tag updated
    /// - `Ok(None)` - Tag does not exist
    /// - `Err(Error::ConflictError(DuplicateTagName))` - A different tag holds the name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_tag(&self, id: i32, params: TagParams) -> Result<Option<TagModel>, Error> {
        let tag_repo = TagRepository::new(self.db);

        if !tag_repo.exists(id).await? {
            return Ok(None);
        }

        if let Some(existing) = tag_repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(ConflictError::DuplicateTagName(params.name).into());
            }
        }

        Ok(tag_repo.update(id, params).await?)
    }

    /// Deletes a tag along with all of its article associations
    ///
    /// Both deletes run in one transaction so no join row is left pointing at a missing tag.
    ///
    /// # Returns
    /// - `Ok(true)` - Tag deleted
    /// - `Ok(false)` - Tag did not exist
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_tag(&self, id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let tag_repo = TagRepository::new(&txn);

        let removed_associations = tag_repo.delete_news_tags(id).await?;
        let result = tag_repo.delete(id).await?;

        txn.commit().await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::debug!(
                tag_id = id,
                removed_associations = removed_associations,
                "Deleted tag"
            );
        }

        Ok(deleted)
    }
}
