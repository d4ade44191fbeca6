//! Test fixture modules for database record creation.
//!
//! - `account` - System accounts
//! - `category` - Categories and category trees
//! - `news_article` - News articles and their tag associations
//! - `tag` - Tags

pub mod account;
pub mod category;
pub mod news_article;
pub mod tag;
