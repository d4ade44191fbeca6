//! Validation error types.
//!
//! Validation errors describe a request that references records which do not exist. They are
//! always detected before any mutation is attempted.

use thiserror::Error;

/// A referenced record does not exist.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Proposed parent category does not exist.
    #[error("Parent category ID {0} does not exist")]
    ParentCategoryNotFound(i32),
    /// Category referenced by an article does not exist.
    #[error("Category ID {0} does not exist")]
    CategoryNotFound(i32),
    /// Article whose tags are being replaced does not exist.
    #[error("News article ID {0} does not exist")]
    ArticleNotFound(i32),
    /// One or more tag IDs of a tag set do not exist.
    ///
    /// The IDs are sorted ascending.
    #[error("Tag IDs {0:?} do not exist")]
    TagsNotFound(Vec<i32>),
}
