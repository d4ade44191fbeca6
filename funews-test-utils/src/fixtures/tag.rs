use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn tag<'a>(&'a self) -> TagFixtures<'a> {
        TagFixtures { setup: self }
    }
}

pub struct TagFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TagFixtures<'a> {
    pub async fn insert_tag(&self, name: &str) -> Result<entity::tag::Model, TestError> {
        Ok(
            entity::prelude::Tag::insert(entity::tag::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                name_key: ActiveValue::Set(name.to_lowercase()),
                note: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
