use super::aggregate::{Payment, PaymentMethod, PaymentStatus};
use crate::domain::common::{ymd, Currency};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    guest_name: &str,
    reservation_id: &str,
    amount: f64,
    method: PaymentMethod,
    status: PaymentStatus,
    date: NaiveDate,
    invoice_number: &str,
) -> Payment {
    Payment {
        id: id.to_string(),
        guest_name: guest_name.to_string(),
        reservation_id: reservation_id.to_string(),
        amount,
        currency: Currency::Htg,
        method,
        status,
        date,
        invoice_number: invoice_number.to_string(),
    }
}

pub(crate) fn payments() -> Vec<Payment> {
    vec![
        payment(
            "pay-001",
            "Pierre Toussaint",
            "RES-001",
            10500.0,
            PaymentMethod::Card,
            PaymentStatus::Completed,
            ymd(2025, 11, 3),
            "INV-2025-001",
        ),
        payment(
            "pay-002",
            "Sophie Michel",
            "RES-002",
            4500.0,
            PaymentMethod::Cash,
            PaymentStatus::Completed,
            ymd(2025, 11, 2),
            "INV-2025-002",
        ),
        payment(
            "pay-003",
            "Jacques Bernard",
            "RES-003",
            8400.0,
            PaymentMethod::BankTransfer,
            PaymentStatus::Pending,
            ymd(2025, 11, 5),
            "INV-2025-003",
        ),
        payment(
            "pay-004",
            "Marie Laurent",
            "RES-004",
            4500.0,
            PaymentMethod::Card,
            PaymentStatus::Completed,
            ymd(2025, 11, 1),
            "INV-2025-004",
        ),
    ]
}
