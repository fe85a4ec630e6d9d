use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{pooled_connection::bb8::Pool, AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::info;
use uuid::Uuid;

use crate::models::*;
use crate::schema::*;
use bigdecimal::ToPrimitive;
use shared::{Attachment, BuyerData, DomainError, GraveRef, PaymentInput, ReservationStatus};

type DbPool = Pool<AsyncPgConnection>;

/// Owns the reservation lifecycle and the payment records tied to it.
#[derive(Clone)]
pub struct ReservationService {
    pool: DbPool,
}

impl ReservationService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Records a payment against a reservation owned by `caller`.
    ///
    /// Guard check, payment insert, and reservation update run in one
    /// transaction. The update re-asserts the prior status in its filter,
    /// so of two racing submissions exactly one commits; the loser rolls
    /// its payment insert back and fails with invalid-state.
    pub async fn pay(
        &self,
        caller: Uuid,
        reservation_id: Uuid,
        input: &PaymentInput,
    ) -> Result<(Reservation, Payment), DomainError> {
        input.validate()?;
        let attachment = Attachment::decode(&input.attachment)?;

        let new_payment = NewPayment {
            id: Uuid::new_v4(),
            reservation_id,
            method: input.method.clone(),
            account_name: input.account_name.clone(),
            account_number: input.account_number.clone(),
            attachment: attachment.bytes,
            attachment_type: attachment.content_type,
        };

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let (updated, payment) = conn
            .transaction::<_, DomainError, _>(|conn| {
                Box::pin(async move {
                    // Missing and foreign-owned reservations are the same
                    // failure on purpose.
                    let reservation = reservations::table
                        .filter(reservations::id.eq(reservation_id))
                        .filter(reservations::buyer_id.eq(caller))
                        .first::<Reservation>(conn)
                        .await
                        .optional()?;
                    let Some(reservation) = reservation else {
                        return Err(DomainError::not_found("Reservation"));
                    };

                    let current = ReservationStatus::parse(&reservation.status)?;
                    let next = current.transition(ReservationStatus::WaitingForConfirmation)?;

                    let payment: Payment = diesel::insert_into(payments::table)
                        .values(&new_payment)
                        .get_result(conn)
                        .await?;

                    let now = Utc::now();
                    let updated = diesel::update(
                        reservations::table
                            .filter(reservations::id.eq(reservation_id))
                            .filter(reservations::status.eq(current.as_str())),
                    )
                    .set((
                        reservations::status.eq(next.as_str()),
                        reservations::paid_at.eq(now),
                        reservations::updated_at.eq(now),
                    ))
                    .get_result::<Reservation>(conn)
                    .await
                    .optional()?;

                    // Zero rows means a concurrent submission advanced the
                    // status between our read and write; abort so the
                    // payment insert rolls back. Re-read the status so the
                    // error reports the state that blocked us, not the one
                    // we read before the race.
                    let Some(updated) = updated else {
                        let status = reservations::table
                            .filter(reservations::id.eq(reservation_id))
                            .select(reservations::status)
                            .first::<String>(conn)
                            .await?;
                        return Err(DomainError::InvalidStatus {
                            current: ReservationStatus::parse(&status)?,
                        });
                    };

                    Ok((updated, payment))
                })
            })
            .await?;

        info!("Payment {} recorded for reservation {}", payment.id, updated.id);
        Ok((updated, payment))
    }

    /// Creates a reservation in `waiting for payment` for the caller,
    /// snapshotting the grave's current price.
    pub async fn reserve(
        &self,
        caller: Uuid,
        grave_ref: &GraveRef,
        buyer: &BuyerData,
    ) -> Result<Reservation, DomainError> {
        buyer.validate()?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let grave = graves::table
            .filter(graves::id.eq(grave_ref.id))
            .first::<Grave>(&mut conn)
            .await
            .optional()?;
        let Some(grave) = grave else {
            return Err(DomainError::not_found("Grave"));
        };

        // The client quotes the price it displayed; a mismatch means the
        // listing changed under it.
        if grave.price.to_f64() != Some(grave_ref.price) {
            return Err(DomainError::validation(
                "grave.price",
                "grave price has changed, reload the listing",
            ));
        }

        let new_reservation = NewReservation {
            id: Uuid::new_v4(),
            grave_id: grave.id,
            buyer_id: caller,
            buyer_name: buyer.name.clone(),
            buyer_ktp: buyer.ktp.clone(),
            buyer_phone: buyer.phone_number.clone(),
            price: grave.price.clone(),
            status: ReservationStatus::WaitingForPayment.as_str().to_string(),
        };

        let reservation: Reservation = diesel::insert_into(reservations::table)
            .values(&new_reservation)
            .get_result(&mut conn)
            .await?;

        info!("Reservation {} created for grave {}", reservation.id, grave.id);
        Ok(reservation)
    }

    pub async fn grave_detail(&self, grave_id: Uuid) -> Result<Grave, DomainError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let grave = graves::table
            .filter(graves::id.eq(grave_id))
            .first::<Grave>(&mut conn)
            .await
            .optional()?;

        grave.ok_or_else(|| DomainError::not_found("Grave"))
    }
}
