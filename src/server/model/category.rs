use serde::{Deserialize, Serialize};

/// Fields of a category supplied when creating or updating it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryParams {
    pub name: String,
    pub description: String,
    pub parent_id: Option<i32>,
    pub is_active: bool,
}

impl CategoryParams {
    /// Active category with an empty description.
    pub fn new(name: impl Into<String>, parent_id: Option<i32>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent_id,
            is_active: true,
        }
    }
}
