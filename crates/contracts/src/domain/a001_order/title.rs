//! Display title of an order
//!
//! Precedence, first match wins:
//! 1. the stored `displayTitle` when non-empty;
//! 2. `"{projectCode} - {projectName}[ - {clientname}] - {orderPart}"` when both
//!    project fields are non-empty, `orderPart` being `D` + the zero-padded
//!    order number (empty without a number);
//! 3. the fallback label followed by the first 8 characters of the id.

use serde::{Deserialize, Serialize};

use super::aggregate::Order;

/// Number of id characters kept by the fallback title
pub const FALLBACK_ID_CHARS: usize = 8;

/// Formatting rules of the composed and fallback titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlePolicy {
    /// Zero-padding width of the order number
    pub order_number_width: usize,
    /// Prefix of the fallback title
    pub fallback_label: String,
    /// Insert the client name segment when present
    pub include_client: bool,
}

impl TitlePolicy {
    /// Current header format: client segment, 5 digits, "Demande #"
    pub fn canonical() -> Self {
        Self {
            order_number_width: 5,
            fallback_label: "Demande #".to_string(),
            include_client: true,
        }
    }

    /// Earlier header format: no client segment, 4 digits, "Commande #"
    pub fn legacy() -> Self {
        Self {
            order_number_width: 4,
            fallback_label: "Commande #".to_string(),
            include_client: false,
        }
    }

    /// `D` + zero-padded number; empty for a missing or zero number
    pub fn order_part(&self, order_number: Option<u32>) -> String {
        match order_number {
            Some(n) if n > 0 => format!("D{:0width$}", n, width = self.order_number_width),
            _ => String::new(),
        }
    }
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self::canonical()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Resolve the header title of `order` under `policy`
pub fn resolve_title(order: &Order, policy: &TitlePolicy) -> String {
    if let Some(title) = non_empty(&order.display_title) {
        return title.to_string();
    }

    if let (Some(code), Some(name)) = (non_empty(&order.project_code), non_empty(&order.project_name)) {
        let mut parts = vec![code, name];
        let client = non_empty(&order.client_name).filter(|_| policy.include_client);
        if let Some(client) = client {
            parts.push(client);
        }
        let order_part = policy.order_part(order.order_number);
        parts.push(&order_part);
        return parts.join(" - ");
    }

    let short_id: String = order.commande_id.chars().take(FALLBACK_ID_CHARS).collect();
    format!("{}{}", policy.fallback_label, short_id)
}
