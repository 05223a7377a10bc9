use super::EntityMetadata;

/// Aggregate root: instance accessors plus static class metadata
pub trait AggregateRoot {
    type Id;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Business code (e.g. "ART-00042")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Collection name, also the REST resource name (e.g. "catalogue")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// REST collection path (e.g. "/api/catalogue")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
