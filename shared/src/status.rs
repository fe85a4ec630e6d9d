use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Lifecycle state of a reservation.
///
/// Transitions run one way only:
/// `WaitingForPayment -> WaitingForConfirmation -> Confirmed | Rejected`.
/// A payment may be recorded only while the reservation is in
/// `WaitingForPayment`; `Confirmed` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "waiting for payment")]
    WaitingForPayment,
    #[serde(rename = "waiting for confirmation")]
    WaitingForConfirmation,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "rejected")]
    Rejected,
}

impl ReservationStatus {
    /// Database and wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingForPayment => "waiting for payment",
            Self::WaitingForConfirmation => "waiting for confirmation",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "waiting for payment" => Ok(Self::WaitingForPayment),
            "waiting for confirmation" => Ok(Self::WaitingForConfirmation),
            "confirmed" => Ok(Self::Confirmed),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::internal(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::WaitingForPayment, Self::WaitingForConfirmation)
                | (Self::WaitingForConfirmation, Self::Confirmed)
                | (Self::WaitingForConfirmation, Self::Rejected)
        )
    }

    /// Validates and performs a single state transition.
    pub fn transition(self, next: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidStatus { current: self })
        }
    }

    /// Whether the reservation may still receive a payment submission.
    pub fn accepts_payment(self) -> bool {
        self == Self::WaitingForPayment
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ReservationStatus::{self, *};
    use rstest::rstest;

    #[rstest]
    #[case(WaitingForPayment, WaitingForConfirmation, true)]
    #[case(WaitingForConfirmation, Confirmed, true)]
    #[case(WaitingForConfirmation, Rejected, true)]
    #[case(WaitingForPayment, Confirmed, false)]
    #[case(WaitingForConfirmation, WaitingForPayment, false)]
    #[case(Confirmed, Rejected, false)]
    #[case(Rejected, WaitingForPayment, false)]
    #[case(WaitingForPayment, WaitingForPayment, false)]
    fn transitions_are_monotonic(
        #[case] from: ReservationStatus,
        #[case] to: ReservationStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
        assert_eq!(from.transition(to).is_ok(), allowed);
    }

    #[rstest]
    #[case(WaitingForPayment, "waiting for payment")]
    #[case(WaitingForConfirmation, "waiting for confirmation")]
    #[case(Confirmed, "confirmed")]
    #[case(Rejected, "rejected")]
    fn string_form_round_trips(#[case] status: ReservationStatus, #[case] text: &str) {
        assert_eq!(status.as_str(), text);
        assert_eq!(ReservationStatus::parse(text).unwrap(), status);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(ReservationStatus::parse("pending").is_err());
    }

    #[test]
    fn only_waiting_for_payment_accepts_payment() {
        assert!(WaitingForPayment.accepts_payment());
        assert!(!WaitingForConfirmation.accepts_payment());
        assert!(!Confirmed.accepts_payment());
        assert!(!Rejected.accepts_payment());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&WaitingForPayment).unwrap();
        assert_eq!(json, "\"waiting for payment\"");
        let back: ReservationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WaitingForPayment);
    }
}
