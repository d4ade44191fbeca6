use serde::{Deserialize, Serialize};

/// Fields of a news article supplied when creating or updating it.
///
/// Timestamps are set by the repository: `created_at` on insert, `modified_at` on update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsArticleParams {
    pub title: String,
    pub headline: String,
    pub content: String,
    pub source: Option<String>,
    pub category_id: i32,
    pub status: bool,
    /// Account performing the change; stored as creator on insert and updater on update.
    pub account_id: Option<i16>,
}
