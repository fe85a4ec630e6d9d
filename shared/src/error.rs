use std::collections::BTreeMap;

use thiserror::Error;

use crate::ReservationStatus;

/// Business failures surfaced to the caller as structured JSON.
///
/// Not-found deliberately covers both "absent" and "owned by someone else"
/// so the API does not leak which reservations exist.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Invalid reservation status")]
    InvalidStatus { current: ReservationStatus },

    #[error("Validation failed")]
    Validation { errors: BTreeMap<String, String> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self::Validation { errors }
    }

    /// Field-level detail included in the error envelope, when any.
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Validation { errors } => Some(errors.clone()),
            Self::InvalidStatus { current } => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "status".to_string(),
                    format!("payment is not allowed while reservation is {current}"),
                );
                Some(errors)
            }
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for DomainError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("Reservation");
        assert_eq!(err.to_string(), "Reservation not found");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn invalid_status_carries_field_detail() {
        let err = DomainError::InvalidStatus {
            current: ReservationStatus::WaitingForConfirmation,
        };
        let errors = err.field_errors().unwrap();
        assert!(errors["status"].contains("waiting for confirmation"));
    }

    #[test]
    fn validation_keeps_dotted_keys() {
        let err = DomainError::validation("buyer_data.name", "name is required");
        let errors = err.field_errors().unwrap();
        assert_eq!(errors["buyer_data.name"], "name is required");
    }
}
