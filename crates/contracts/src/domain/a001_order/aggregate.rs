use serde::{Deserialize, Serialize};

use super::title::{resolve_title, TitlePolicy};
use crate::enums::order_status::OrderStatus;

// ============================================================================
// Aggregate
// ============================================================================

/// Commande (customer order / request) as returned by `GET /api/commandes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "commandeid")]
    pub commande_id: String,

    /// Title stored by the backend, takes precedence over any composition
    #[serde(rename = "displayTitle", default)]
    pub display_title: Option<String>,

    #[serde(rename = "projectCode", default)]
    pub project_code: Option<String>,

    #[serde(rename = "projectName", default)]
    pub project_name: Option<String>,

    #[serde(rename = "clientname", default)]
    pub client_name: Option<String>,

    #[serde(rename = "orderNumber", default)]
    pub order_number: Option<u32>,

    #[serde(default)]
    pub termine: OrderStatus,
}

impl Order {
    /// Order with only an identifier; every optional field empty
    pub fn new(commande_id: impl Into<String>) -> Self {
        Self {
            commande_id: commande_id.into(),
            display_title: None,
            project_code: None,
            project_name: None,
            client_name: None,
            order_number: None,
            termine: OrderStatus::InProgress,
        }
    }

    /// Title shown in the order header
    pub fn display_title(&self, policy: &TitlePolicy) -> String {
        resolve_title(self, policy)
    }

    pub fn is_complete(&self) -> bool {
        self.termine.is_complete()
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `PATCH /api/commandes/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdateDto {
    pub termine: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "commandeid": "abcdef1234567890",
            "projectCode": "PRJ",
            "projectName": "Widget",
            "clientname": "Acme",
            "orderNumber": 7,
            "termine": false
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.commande_id, "abcdef1234567890");
        assert_eq!(order.display_title, None);
        assert_eq!(order.client_name.as_deref(), Some("Acme"));
        assert_eq!(order.order_number, Some(7));
        assert!(!order.is_complete());
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let order: Order = serde_json::from_str(r#"{"commandeid": "x1"}"#).unwrap();
        assert_eq!(order, Order::new("x1"));
    }

    #[test]
    fn test_status_update_body() {
        let body = OrderStatusUpdateDto { termine: OrderStatus::Completed };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"termine":true}"#);
    }
}
