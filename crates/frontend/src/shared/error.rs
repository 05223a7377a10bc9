use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Erreur réseau : {0}")]
    Network(String),

    #[error("Élément introuvable")]
    NotFound,

    #[error("Erreur serveur (HTTP {status}){}", message_suffix(.message))]
    Http { status: u16, message: Option<String> },

    #[error("Réponse invalide : {0}")]
    Decode(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(" : {}", m)).unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Map a non-success status and its body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            });
        ApiError::Http { status, message }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        assert_eq!(ApiError::from_status(404, "whatever"), ApiError::NotFound);
    }

    #[test]
    fn test_json_error_body() {
        let err = ApiError::from_status(422, r#"{"error":"Référence déjà utilisée"}"#);
        assert_eq!(
            err,
            ApiError::Http { status: 422, message: Some("Référence déjà utilisée".into()) }
        );
        assert_eq!(err.to_string(), "Erreur serveur (HTTP 422) : Référence déjà utilisée");
    }

    #[test]
    fn test_plain_and_empty_bodies() {
        assert_eq!(
            ApiError::from_status(500, "Internal Server Error"),
            ApiError::Http { status: 500, message: Some("Internal Server Error".into()) }
        );
        let err = ApiError::from_status(503, "");
        assert_eq!(err, ApiError::Http { status: 503, message: None });
        assert_eq!(err.to_string(), "Erreur serveur (HTTP 503)");
        assert_eq!(ApiError::from_status(500, r#"{"detail":"x"}"#), ApiError::Http { status: 500, message: None });
    }
}
