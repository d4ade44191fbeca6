use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::category::CategoryParams;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category
    pub async fn create(&self, params: CategoryParams) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            parent_id: ActiveValue::Set(params.parent_id),
            is_active: ActiveValue::Set(params.is_active),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Direct children of a category, not the full subtree
    pub async fn get_sub_categories(
        &self,
        parent_id: i32,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Looks up only the parent reference of a category
    ///
    /// # Returns
    /// - `Ok(None)` - Category does not exist
    /// - `Ok(Some(None))` - Category exists and is a root category
    /// - `Ok(Some(Some(parent_id)))` - Category exists and has a parent
    pub async fn get_parent_id(&self, id: i32) -> Result<Option<Option<i32>>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .select_only()
            .column(entity::category::Column::ParentId)
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await
    }

    /// Updates every field of an existing category
    ///
    /// Returns `Ok(None)` if the category does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: CategoryParams,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let category = match entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(category) => category,
            None => return Ok(None),
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(params.name);
        category_am.description = ActiveValue::Set(params.description);
        category_am.parent_id = ActiveValue::Set(params.parent_id);
        category_am.is_active = ActiveValue::Set(params.is_active);

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }

    /// Deletes a category
    ///
    /// Returns OK regardless of category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn has_sub_categories(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
