use serde::{Deserialize, Serialize};

/// Fields of a tag supplied when creating or updating it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagParams {
    pub name: String,
    pub note: Option<String>,
}

impl TagParams {
    /// Case-folded form of the name stored in `tag.name_key`
    ///
    /// Folding happens here rather than with SQL `LOWER`, which only folds ASCII on SQLite
    /// and on PostgreSQL under the C collation.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: None,
        }
    }
}

/// Case-folded lookup key for a tag name
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
