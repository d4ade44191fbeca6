//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models so service signatures don't have to spell out
//! the `entity` crate paths.

/// Type alias for category database model.
///
/// # Fields (from `entity::category::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `description` - Free-form description
/// - `parent_id` - Parent category, `None` for root categories
/// - `is_active` - Whether the category is shown to readers
pub type CategoryModel = entity::category::Model;

/// Type alias for tag database model.
pub type TagModel = entity::tag::Model;

/// Type alias for news article database model.
pub type NewsArticleModel = entity::news_article::Model;

/// Type alias for the article/tag join row.
pub type NewsTagModel = entity::news_tag::Model;

/// Type alias for system account database model.
///
/// # Fields (from `entity::system_account::Model`)
/// - `account_id` - Primary key, assigned by the application
/// - `name` - Display name
/// - `email` - Unique login email
/// - `password` - Login password
/// - `role` - Account role, see [`AccountRole`](crate::server::auth::AccountRole)
pub type SystemAccountModel = entity::system_account::Model;
