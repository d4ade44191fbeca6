//! Declarative test builder.
//!
//! The builder queues table creation and fixture insertion; everything is executed in order
//! during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    include_news_tables: bool,

    // Database fixtures to insert
    accounts: Vec<(i16, String, i16)>, // (account_id, email, role)
    categories: Vec<(String, Option<i32>)>, // (name, parent_id)
    tags: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_news_tables: false,
            accounts: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add every table of the news schema to the test database.
    ///
    /// Creates SystemAccount, Category, Tag, NewsArticle and NewsTag in dependency order.
    pub fn with_news_tables(mut self) -> Self {
        self.include_news_tables = true;
        self
    }

    /// Insert a system account during `build()`.
    pub fn with_account(mut self, account_id: i16, email: &str, role: i16) -> Self {
        self.accounts.push((account_id, email.to_string(), role));
        self
    }

    /// Insert a category during `build()`.
    ///
    /// Categories are inserted in call order, so IDs are assigned 1, 2, 3, ... and a later
    /// category may use an earlier one as its parent.
    pub fn with_category(mut self, name: &str, parent_id: Option<i32>) -> Self {
        self.categories.push((name.to_string(), parent_id));
        self
    }

    /// Insert a tag during `build()`. IDs are assigned in call order starting at 1.
    pub fn with_tag(mut self, name: &str) -> Self {
        self.tags.push(name.to_string());
        self
    }

    /// Create the test context, tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_news_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SystemAccount),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::NewsArticle),
                schema.create_table_from_entity(entity::prelude::NewsTag),
            ]);
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (account_id, email, role) in self.accounts {
            setup
                .account()
                .insert_account(account_id, &email, role)
                .await?;
        }

        for (name, parent_id) in self.categories {
            setup.category().insert_category(&name, parent_id).await?;
        }

        for name in self.tags {
            setup.tag().insert_tag(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
