//! Category tree service.
//!
//! Categories form a self-referencing tree through `parent_id`. Storage foreign keys only
//! guarantee the parent exists; acyclicity is enforced here by walking the ancestor chain of
//! the proposed parent on every mutation that sets a parent.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::category::CategoryRepository,
    error::{conflict::ConflictError, validation::ValidationError, Error},
    model::{category::CategoryParams, db::CategoryModel},
};

/// Service for managing the category tree.
pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all_categories(&self) -> Result<Vec<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Direct children of a category
    pub async fn get_sub_categories(&self, parent_id: i32) -> Result<Vec<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db)
            .get_sub_categories(parent_id)
            .await?)
    }

    /// Creates a category after confirming its parent exists
    ///
    /// A new category has no descendants yet, so only the parent reference needs checking.
    ///
    /// # Returns
    /// - `Ok(CategoryModel)` - Category created
    /// - `Err(Error::ValidationError(ParentCategoryNotFound))` - `parent_id` is set but missing
    /// - `Err(Error::ConflictError(Constraint))` - Parent was deleted concurrently
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_category(&self, params: CategoryParams) -> Result<CategoryModel, Error> {
        let category_repo = CategoryRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            if !category_repo.exists(parent_id).await? {
                return Err(ValidationError::ParentCategoryNotFound(parent_id).into());
            }
        }

        let category = category_repo.create(params).await?;

        tracing::debug!(
            category_id = category.id,
            parent_id = ?category.parent_id,
            "Created category"
        );

        Ok(category)
    }

    /// Updates a category, re-validating its parent on every call
    ///
    /// # Returns
    /// - `Ok(Some(CategoryModel))` - Category updated
    /// - `Ok(None)` - Category does not exist
    /// - `Err(Error::ValidationError(ParentCategoryNotFound))` - New parent does not exist
    /// - `Err(Error::ConflictError(CategoryCycle))` - New parent is the category itself or one
    ///   of its descendants
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_category(
        &self,
        id: i32,
        params: CategoryParams,
    ) -> Result<Option<CategoryModel>, Error> {
        let category_repo = CategoryRepository::new(self.db);

        if !category_repo.exists(id).await? {
            return Ok(None);
        }

        if let Some(parent_id) = params.parent_id {
            ensure_acyclic(&category_repo, id, parent_id).await?;
        }

        let category = category_repo.update(id, params).await?;

        tracing::debug!(category_id = id, "Updated category");

        Ok(category)
    }

    /// Deletes a category that has no subcategories
    ///
    /// Articles are never reassigned or deleted; while any article still references the
    /// category the storage foreign key rejects the delete.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - Category did not exist
    /// - `Err(Error::ConflictError(CategoryHasSubCategories))` - Category still has children
    /// - `Err(Error::ConflictError(Constraint))` - Articles still reference the category
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_category(&self, id: i32) -> Result<bool, Error> {
        let category_repo = CategoryRepository::new(self.db);

        if category_repo.has_sub_categories(id).await? {
            return Err(ConflictError::CategoryHasSubCategories(id).into());
        }

        let result = category_repo.delete(id).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            tracing::debug!(category_id = id, "Deleted category");
        }

        Ok(deleted)
    }
}

/// Confirms `parent_id` exists and is not `category_id` or one of its descendants
///
/// Walks upward from the proposed parent until a root is reached, O(depth). A visited set
/// stops the walk if the stored tree already contains a loop.
async fn ensure_acyclic<C: ConnectionTrait>(
    category_repo: &CategoryRepository<'_, C>,
    category_id: i32,
    parent_id: i32,
) -> Result<(), Error> {
    let cycle = || ConflictError::CategoryCycle {
        category_id,
        parent_id,
    };

    if parent_id == category_id {
        return Err(cycle().into());
    }

    let mut visited = HashSet::new();
    let mut current = parent_id;

    loop {
        let Some(next) = category_repo.get_parent_id(current).await? else {
            // Only the proposed parent itself can be missing; ancestors are held in place by
            // the foreign key.
            if current == parent_id {
                return Err(ValidationError::ParentCategoryNotFound(parent_id).into());
            }
            return Ok(());
        };

        match next {
            None => return Ok(()),
            Some(ancestor_id) if ancestor_id == category_id => return Err(cycle().into()),
            Some(ancestor_id) => {
                if !visited.insert(ancestor_id) {
                    tracing::error!(
                        category_id = ancestor_id,
                        "Category tree already contains a cycle"
                    );
                    return Err(cycle().into());
                }
                current = ancestor_id;
            }
        }
    }
}
