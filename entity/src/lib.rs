//! SeaORM entities for the news publishing schema.

pub mod prelude;

pub mod category;
pub mod news_article;
pub mod news_tag;
pub mod system_account;
pub mod tag;
