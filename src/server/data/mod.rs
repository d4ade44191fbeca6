//! Data access layer repositories.
//!
//! One repository per aggregate root. Repositories are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so the same code runs against a plain
//! connection or inside a [`DatabaseTransaction`](sea_orm::DatabaseTransaction) opened by a
//! service. They perform single statements and enforce no cross-entity business rules;
//! that is the service layer's job.

pub mod category;
pub mod news_article;
pub mod system_account;
pub mod tag;
