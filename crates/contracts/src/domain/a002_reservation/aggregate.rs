use crate::domain::common::{Currency, Emphasis, Presentation};
use crate::shared::filter::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "confirmed" => Some(ReservationStatus::Confirmed),
            "pending" => Some(ReservationStatus::Pending),
            "checked_in" => Some(ReservationStatus::CheckedIn),
            "checked_out" => Some(ReservationStatus::CheckedOut),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> [ReservationStatus; 5] {
        [
            ReservationStatus::Confirmed,
            ReservationStatus::Pending,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ]
    }

    pub const fn presentation(self) -> Presentation {
        match self {
            ReservationStatus::Confirmed => Presentation::new("Confirmed", Emphasis::Positive),
            ReservationStatus::Pending => Presentation::new("Pending", Emphasis::Outline),
            ReservationStatus::CheckedIn => Presentation::new("Checked In", Emphasis::Neutral),
            ReservationStatus::CheckedOut => Presentation::new("Checked Out", Emphasis::Outline),
            ReservationStatus::Cancelled => Presentation::new("Cancelled", Emphasis::Negative),
        }
    }

    /// Check-in is only offered from `Confirmed`.
    pub fn can_check_in(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed)
    }

    /// Cancelling is refused once cancelled or checked out.
    pub fn can_cancel(&self) -> bool {
        !matches!(
            self,
            ReservationStatus::Cancelled | ReservationStatus::CheckedOut
        )
    }
}

/// Row-level action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    View,
    CheckIn,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub total_amount: f64,
    pub currency: Currency,
}

impl Reservation {
    /// Buttons rendered for this row, in display order.
    pub fn actions(&self) -> Vec<ReservationAction> {
        let mut actions = vec![ReservationAction::View];
        if self.status.can_check_in() {
            actions.push(ReservationAction::CheckIn);
        }
        if self.status.can_cancel() {
            actions.push(ReservationAction::Cancel);
        }
        actions
    }
}

impl Searchable for Reservation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.guest_name.as_str(), self.room_number.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: "res-x".into(),
            guest_name: "Guest".into(),
            room_number: "101".into(),
            check_in: ymd(2025, 11, 3),
            check_out: ymd(2025, 11, 6),
            status,
            total_amount: 100.0,
            currency: Currency::Htg,
        }
    }

    #[test]
    fn test_confirmed_offers_check_in_and_cancel() {
        assert_eq!(
            reservation(ReservationStatus::Confirmed).actions(),
            vec![
                ReservationAction::View,
                ReservationAction::CheckIn,
                ReservationAction::Cancel
            ]
        );
    }

    #[test]
    fn test_terminal_states_offer_neither() {
        for status in [ReservationStatus::Cancelled, ReservationStatus::CheckedOut] {
            assert_eq!(reservation(status).actions(), vec![ReservationAction::View]);
        }
    }

    #[test]
    fn test_pending_and_checked_in_can_only_cancel() {
        for status in [ReservationStatus::Pending, ReservationStatus::CheckedIn] {
            assert_eq!(
                reservation(status).actions(),
                vec![ReservationAction::View, ReservationAction::Cancel]
            );
        }
    }

    #[test]
    fn test_status_table() {
        assert_eq!(ReservationStatus::CheckedIn.presentation().label, "Checked In");
        assert_eq!(
            ReservationStatus::Cancelled.presentation().emphasis,
            Emphasis::Negative
        );
        assert_eq!(ReservationStatus::Pending.presentation().emphasis, Emphasis::Outline);
        for status in ReservationStatus::all() {
            assert_eq!(ReservationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&ReservationStatus::CheckedOut).unwrap();
        assert_eq!(json, "\"checked_out\"");
    }
}
