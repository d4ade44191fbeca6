use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tag::{name_key, TagParams};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new tag
    pub async fn create(&self, params: TagParams) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::tag::ActiveModel {
            name_key: ActiveValue::Set(params.name_key()),
            name: ActiveValue::Set(params.name),
            note: ActiveValue::Set(params.note),
            ..Default::default()
        };

        tag.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a tag by name, ignoring case
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::NameKey.eq(name_key(name)))
            .one(self.db)
            .await
    }

    /// Returns true if any tag has this name, ignoring case
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Tag::find()
            .filter(entity::tag::Column::NameKey.eq(name_key(name)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Tag::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Returns the subset of the provided tag IDs that exist
    pub async fn get_existing_ids(&self, ids: &HashSet<i32>) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|tag| tag.id).collect())
    }

    /// Updates name & note of an existing tag
    ///
    /// Returns `Ok(None)` if the tag does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: TagParams,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        let tag = match entity::prelude::Tag::find_by_id(id).one(self.db).await? {
            Some(tag) => tag,
            None => return Ok(None),
        };

        let mut tag_am = tag.into_active_model();
        tag_am.name_key = ActiveValue::Set(params.name_key());
        tag_am.name = ActiveValue::Set(params.name);
        tag_am.note = ActiveValue::Set(params.note);

        let tag = tag_am.update(self.db).await?;

        Ok(Some(tag))
    }

    /// Deletes all article associations of a tag
    ///
    /// Returns the number of join rows removed.
    pub async fn delete_news_tags(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::NewsTag::delete_many()
            .filter(entity::news_tag::Column::TagId.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a tag
    ///
    /// Fails with a foreign key violation if article associations still reference the tag,
    /// remove them first with [`Self::delete_news_tags`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Tag::delete_by_id(id).exec(self.db).await
    }
}
