//! Server-side core of FUNews.
//!
//! This module contains the news publishing backend's data access and business logic: the
//! category tree, tags and their association with articles, system accounts, the authorization
//! policy evaluator and the startup bootstrap that guarantees an administrator account. Request
//! routing, sessions and views live outside this crate and consume the services defined here.

pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
