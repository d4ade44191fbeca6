pub use sea_orm_migration::prelude::*;

mod m20251020_000001_system_account;
mod m20251020_000002_category;
mod m20251020_000003_tag;
mod m20251020_000004_news_article;
mod m20251020_000005_news_tag;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_system_account::Migration),
            Box::new(m20251020_000002_category::Migration),
            Box::new(m20251020_000003_tag::Migration),
            Box::new(m20251020_000004_news_article::Migration),
            Box::new(m20251020_000005_news_tag::Migration),
        ]
    }
}
