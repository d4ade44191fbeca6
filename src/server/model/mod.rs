//! Server models and type definitions.
//!
//! This module contains database model type aliases and the input parameter types accepted by
//! the service layer. Parameter types carry no identity; the ID of the record being created or
//! updated is always passed separately.

pub mod category;
pub mod db;
pub mod news_article;
pub mod tag;
