use serde::{Deserialize, Serialize};

/// Completion status of an order (`termine` on the wire)
///
/// The backend stores the status as a boolean flag; older payloads also carry
/// it as `0`/`1` or as a status code, so deserialisation accepts all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawOrderStatus", into = "bool")]
pub enum OrderStatus {
    #[default]
    InProgress,
    Completed,
}

impl OrderStatus {
    /// Status code used by the UI controls
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "en_cours",
            OrderStatus::Completed => "termine",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "En cours",
            OrderStatus::Completed => "Terminée",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![OrderStatus::InProgress, OrderStatus::Completed]
    }

    /// Parse a status code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en_cours" => Some(OrderStatus::InProgress),
            "termine" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl From<OrderStatus> for bool {
    fn from(status: OrderStatus) -> bool {
        status.is_complete()
    }
}

impl From<bool> for OrderStatus {
    fn from(flag: bool) -> Self {
        if flag {
            OrderStatus::Completed
        } else {
            OrderStatus::InProgress
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrderStatus {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl TryFrom<RawOrderStatus> for OrderStatus {
    type Error = String;

    fn try_from(raw: RawOrderStatus) -> Result<Self, Self::Error> {
        match raw {
            RawOrderStatus::Flag(flag) => Ok(flag.into()),
            RawOrderStatus::Number(0) => Ok(OrderStatus::InProgress),
            RawOrderStatus::Number(1) => Ok(OrderStatus::Completed),
            RawOrderStatus::Number(n) => Err(format!("Invalid order status: {}", n)),
            RawOrderStatus::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(OrderStatus::Completed),
                "false" => Ok(OrderStatus::InProgress),
                _ => OrderStatus::from_code(&text)
                    .ok_or_else(|| format!("Invalid order status: {}", text)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        termine: OrderStatus,
    }

    fn parse(json: &str) -> Result<OrderStatus, serde_json::Error> {
        serde_json::from_str::<Wrapper>(json).map(|w| w.termine)
    }

    #[test]
    fn test_accepts_backend_representations() {
        assert_eq!(parse(r#"{"termine": true}"#).unwrap(), OrderStatus::Completed);
        assert_eq!(parse(r#"{"termine": false}"#).unwrap(), OrderStatus::InProgress);
        assert_eq!(parse(r#"{"termine": 1}"#).unwrap(), OrderStatus::Completed);
        assert_eq!(parse(r#"{"termine": 0}"#).unwrap(), OrderStatus::InProgress);
        assert_eq!(parse(r#"{"termine": "TERMINE"}"#).unwrap(), OrderStatus::Completed);
        assert_eq!(parse(r#"{"termine": "en_cours"}"#).unwrap(), OrderStatus::InProgress);
        assert_eq!(parse(r#"{"termine": "true"}"#).unwrap(), OrderStatus::Completed);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(parse(r#"{"termine": 2}"#).is_err());
        assert!(parse(r#"{"termine": "annule"}"#).is_err());
    }

    #[test]
    fn test_serializes_as_flag() {
        let json = serde_json::to_string(&Wrapper { termine: OrderStatus::Completed }).unwrap();
        assert_eq!(json, r#"{"termine":true}"#);
    }

    #[test]
    fn test_codes() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("unknown"), None);
    }
}
