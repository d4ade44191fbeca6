//! Conflict error types.
//!
//! Conflict errors are returned when a mutation would break a business invariant: tree
//! acyclicity, safe deletion, name or email uniqueness. Storage-level constraint violations
//! that slip past the in-process checks (e.g. two concurrent requests racing) are reported as
//! [`ConflictError::Constraint`].

use thiserror::Error;

/// A business invariant would be violated by the requested mutation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConflictError {
    /// Setting the parent would make the category its own ancestor.
    #[error("Category ID {category_id} cannot use category ID {parent_id} as its parent as it would create a cycle")]
    CategoryCycle { category_id: i32, parent_id: i32 },
    /// Category still has direct subcategories.
    #[error("Category ID {0} has subcategories and cannot be deleted")]
    CategoryHasSubCategories(i32),
    /// Another tag already uses this name (case-insensitive).
    #[error("A tag named {0:?} already exists")]
    DuplicateTagName(String),
    /// Another account already uses this email.
    #[error("An account with email {0:?} already exists")]
    DuplicateAccountEmail(String),
    /// No account ID is left in the small integer range.
    #[error("Cannot assign a new account ID after {0}")]
    AccountIdExhausted(i16),
    /// Storage rejected the write with a unique or foreign key violation.
    #[error("Database constraint violated: {0}")]
    Constraint(String),
}
