//! Service layer for business rules.
//!
//! Services coordinate repositories to enforce rules that a single repository call cannot:
//! category tree acyclicity, safe deletion, tag name uniqueness and atomic replacement of an
//! article's tag set. Each service borrows a database connection and is constructed per
//! operation by the caller; no service holds state between calls.

pub mod category;
pub mod news_article;
pub mod system_account;
pub mod tag;
