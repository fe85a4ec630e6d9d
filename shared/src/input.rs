use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Grave details echoed back by the client when reserving. The id selects
/// the plot; the quoted price lets the server detect a stale listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraveRef {
    pub id: Uuid,
    pub location: String,
    #[serde(rename = "type")]
    pub plot_type: String,
    pub price: f64,
}

/// Buyer details captured when a reservation is created.
///
/// Unknown fields are rejected at deserialization; validation errors are
/// keyed by the dotted paths the client maps onto its form inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuyerData {
    pub name: String,
    pub ktp: String,
    pub phone_number: String,
}

impl BuyerData {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(
                "buyer_data.name".to_string(),
                "name is required".to_string(),
            );
        }
        if self.ktp.len() != 16 || !self.ktp.bytes().all(|b| b.is_ascii_digit()) {
            errors.insert(
                "buyer_data.ktp".to_string(),
                "KTP number must be 16 digits".to_string(),
            );
        }
        if !is_phone_number(&self.phone_number) {
            errors.insert(
                "buyer_data.phone_number".to_string(),
                "phone number must be 8-15 digits".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation { errors })
        }
    }
}

/// Payment fields submitted alongside the attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentInput {
    pub method: String,
    pub account_name: String,
    pub account_number: String,
    pub attachment: String,
}

impl PaymentInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = BTreeMap::new();

        if self.method.trim().is_empty() {
            errors.insert(
                "data.method".to_string(),
                "payment method is required".to_string(),
            );
        }
        if self.account_name.trim().is_empty() {
            errors.insert(
                "data.account_name".to_string(),
                "account name is required".to_string(),
            );
        }
        if self.account_number.trim().is_empty() {
            errors.insert(
                "data.account_number".to_string(),
                "account number is required".to_string(),
            );
        }
        if self.attachment.is_empty() {
            errors.insert(
                "data.attachment".to_string(),
                "attachment is required".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation { errors })
        }
    }
}

fn is_phone_number(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
