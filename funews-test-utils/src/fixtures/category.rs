use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn category<'a>(&'a self) -> CategoryFixtures<'a> {
        CategoryFixtures { setup: self }
    }
}

pub struct CategoryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CategoryFixtures<'a> {
    pub async fn insert_category(
        &self,
        name: &str,
        parent_id: Option<i32>,
    ) -> Result<entity::category::Model, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} news", name)),
                parent_id: ActiveValue::Set(parent_id),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a straight line of categories, each the child of the previous one.
    ///
    /// Returned in order from root to leaf.
    pub async fn insert_category_chain(
        &self,
        names: &[&str],
    ) -> Result<Vec<entity::category::Model>, TestError> {
        let mut chain: Vec<entity::category::Model> = Vec::with_capacity(names.len());

        for name in names {
            let parent_id = chain.last().map(|parent| parent.id);
            chain.push(self.insert_category(name, parent_id).await?);
        }

        Ok(chain)
    }
}
