//! Authorization policy evaluation.
//!
//! The request pipeline authenticates the caller and hands the resulting claim set to this
//! module. Evaluation is a pure function over the claims: no database access, no side effects.

pub mod claim;
pub mod policy;

pub use claim::{claims_for_account, Claim};
pub use policy::{is_admin, AccountRole, Policy};
