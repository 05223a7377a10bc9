use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of an aggregate.
///
/// Ids travel through URLs and form DTOs as strings, so every id type
/// must round-trip through its string form.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Id as a string (URL path segment, DTO field)
    fn as_string(&self) -> String;

    /// Parse the id back from a string
    fn from_string(s: &str) -> Result<Self, String>;
}
