use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogueItemId(pub Uuid);

impl CatalogueItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CatalogueItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CatalogueItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Article du catalogue
///
/// `base.code` holds the article reference, `base.description` the designation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueItem {
    #[serde(flatten)]
    pub base: BaseAggregate<CatalogueItemId>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub unit: String,

    #[serde(rename = "unitPrice", default)]
    pub unit_price: Option<f64>,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CatalogueItem {
    pub fn new(code: String, description: String, category: String) -> Self {
        Self {
            base: BaseAggregate::new(CatalogueItemId::new_v4(), code, description),
            category,
            unit: String::new(),
            unit_price: None,
            is_active: true,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Case-insensitive match of `query` against reference, designation and category
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.base.code, &self.base.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Form DTO pre-filled from this item (edit panel)
    pub fn to_dto(&self) -> CatalogueItemDto {
        CatalogueItemDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            category: self.category.clone(),
            unit: self.unit.clone(),
            unit_price: self.unit_price,
            comment: self.base.comment.clone(),
            is_active: self.is_active,
        }
    }
}

impl AggregateRoot for CatalogueItem {
    type Id = CatalogueItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn collection_name() -> &'static str {
        "catalogue"
    }

    fn element_name() -> &'static str {
        "Article"
    }

    fn list_name() -> &'static str {
        "Articles du Catalogue"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Add/edit form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueItemDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub unit: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
    pub comment: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Default for CatalogueItemDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            category: String::new(),
            unit: String::new(),
            unit_price: None,
            comment: None,
            is_active: true,
        }
    }
}

impl CatalogueItemDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("La désignation est obligatoire".into());
        }
        if let Some(price) = self.unit_price {
            if !price.is_finite() || price < 0.0 {
                return Err("Le prix unitaire doit être un nombre positif".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogueItem {
        CatalogueItem::new("ART-001".into(), "Vis inox 4x40".into(), "Quincaillerie".into())
    }

    #[test]
    fn test_deserialize_flattened_payload() {
        let json = r#"{
            "id": "6f1c2a40-58a4-4c79-9a52-0f8d1f4d8b11",
            "code": "ART-001",
            "description": "Vis inox 4x40",
            "metadata": {
                "created_at": "2024-03-15T14:02:26Z",
                "updated_at": "2024-03-16T08:00:00Z"
            },
            "category": "Quincaillerie",
            "unit": "boîte",
            "unitPrice": 12.5
        }"#;
        let item: CatalogueItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.to_string_id(), "6f1c2a40-58a4-4c79-9a52-0f8d1f4d8b11");
        assert_eq!(item.base.code, "ART-001");
        assert_eq!(item.unit_price, Some(12.5));
        assert!(item.is_active);
        assert_eq!(item.base.metadata.version, 0);
    }

    #[test]
    fn test_matches_search() {
        let item = item();
        assert!(item.matches_search("art-0"));
        assert!(item.matches_search("INOX"));
        assert!(item.matches_search("quinc"));
        assert!(item.matches_search("  "));
        assert!(!item.matches_search("peinture"));
    }

    #[test]
    fn test_to_dto_carries_id() {
        let item = item();
        let dto = item.to_dto();
        assert_eq!(dto.id, Some(item.to_string_id()));
        assert_eq!(dto.code.as_deref(), Some("ART-001"));
        assert_eq!(dto.description, "Vis inox 4x40");
    }

    #[test]
    fn test_validate() {
        let mut dto = item().to_dto();
        assert!(dto.validate().is_ok());

        dto.unit_price = Some(-1.0);
        assert!(dto.validate().is_err());

        dto.unit_price = None;
        dto.description = "   ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_id_round_trip_and_api_path() {
        let id = CatalogueItemId::new_v4();
        assert_eq!(CatalogueItemId::from_string(&id.as_string()), Ok(id));
        assert!(CatalogueItemId::from_string("not-a-uuid").is_err());
        assert_eq!(CatalogueItem::api_path(), "/api/catalogue");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CatalogueItem::element_name(), "Article");
        assert_eq!(CatalogueItem::list_name(), "Articles du Catalogue");
    }
}
