use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Grave {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub plot_type: String,
    pub location: String,
    pub capacity: i32,
    #[serde(rename = "size")]
    pub size_m2: bigdecimal::BigDecimal,
    pub description: String,
    pub price: bigdecimal::BigDecimal,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Reservation {
    pub id: Uuid,
    pub grave_id: Uuid,
    pub buyer_id: Uuid,
    pub buyer_name: String,
    pub buyer_ktp: String,
    pub buyer_phone: String,
    pub price: bigdecimal::BigDecimal,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation {
    pub id: Uuid,
    pub grave_id: Uuid,
    pub buyer_id: Uuid,
    pub buyer_name: String,
    pub buyer_ktp: String,
    pub buyer_phone: String,
    pub price: bigdecimal::BigDecimal,
    pub status: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct Payment {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub method: String,
    pub account_name: String,
    pub account_number: String,
    pub attachment: Vec<u8>,
    pub attachment_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub method: String,
    pub account_name: String,
    pub account_number: String,
    pub attachment: Vec<u8>,
    pub attachment_type: Option<String>,
}
