use super::aggregate::{Reservation, ReservationStatus};
use crate::domain::common::{ymd, Currency};
use chrono::NaiveDate;

fn reservation(
    id: &str,
    guest_name: &str,
    room_number: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: ReservationStatus,
    total_amount: f64,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        guest_name: guest_name.to_string(),
        room_number: room_number.to_string(),
        check_in,
        check_out,
        status,
        total_amount,
        currency: Currency::Htg,
    }
}

pub(crate) fn reservations() -> Vec<Reservation> {
    vec![
        reservation(
            "res-001",
            "Pierre Toussaint",
            "205",
            ymd(2025, 11, 3),
            ymd(2025, 11, 6),
            ReservationStatus::Confirmed,
            10500.0,
        ),
        reservation(
            "res-002",
            "Sophie Michel",
            "101",
            ymd(2025, 11, 2),
            ymd(2025, 11, 5),
            ReservationStatus::CheckedIn,
            4500.0,
        ),
        reservation(
            "res-003",
            "Jacques Bernard",
            "310",
            ymd(2025, 11, 5),
            ymd(2025, 11, 8),
            ReservationStatus::Pending,
            8400.0,
        ),
        reservation(
            "res-004",
            "Marie Laurent",
            "102",
            ymd(2025, 10, 30),
            ymd(2025, 11, 2),
            ReservationStatus::CheckedOut,
            4500.0,
        ),
        reservation(
            "res-005",
            "Jean Dupont",
            "206",
            ymd(2025, 11, 1),
            ymd(2025, 11, 3),
            ReservationStatus::Cancelled,
            7000.0,
        ),
    ]
}
