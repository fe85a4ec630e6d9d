use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Success envelope: `{ message, success: true, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub message: String,
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            data,
        }
    }
}

/// Failure envelope: `{ message, success: false, errors? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let body = ApiSuccess::new("Pay success", serde_json::json!({"ok": 1}));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Pay success");
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["ok"], 1);
    }

    #[test]
    fn failure_envelope_omits_empty_errors() {
        let json = serde_json::to_value(ApiFailure::new("Reservation not found")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn failure_envelope_keeps_field_errors() {
        let mut errors = BTreeMap::new();
        errors.insert("buyer_data.name".to_string(), "name is required".to_string());
        let json = serde_json::to_value(ApiFailure::with_errors("Validation failed", errors)).unwrap();
        assert_eq!(json["errors"]["buyer_data.name"], "name is required");
    }
}
