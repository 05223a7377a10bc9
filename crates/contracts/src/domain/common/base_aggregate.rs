use serde::{Deserialize, Serialize};
use super::EntityMetadata;

/// Fields shared by every aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Business code of the record (article reference for catalogue items)
    pub code: String,
    /// Human readable name of the record
    pub description: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }
}
