pub use super::category::Entity as Category;
pub use super::news_article::Entity as NewsArticle;
pub use super::news_tag::Entity as NewsTag;
pub use super::system_account::Entity as SystemAccount;
pub use super::tag::Entity as Tag;
