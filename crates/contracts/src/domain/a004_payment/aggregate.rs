use crate::domain::common::{Currency, Emphasis, Presentation};
use crate::shared::filter::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "banknote",
            PaymentMethod::Card => "credit-card",
            PaymentMethod::BankTransfer => "building",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(PaymentStatus::Completed),
            "pending" => Some(PaymentStatus::Pending),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    pub fn all() -> [PaymentStatus; 3] {
        [
            PaymentStatus::Completed,
            PaymentStatus::Pending,
            PaymentStatus::Failed,
        ]
    }

    pub const fn presentation(self) -> Presentation {
        match self {
            PaymentStatus::Completed => Presentation::new("Completed", Emphasis::Positive),
            PaymentStatus::Pending => Presentation::new("Pending", Emphasis::Outline),
            PaymentStatus::Failed => Presentation::new("Failed", Emphasis::Negative),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub guest_name: String,
    /// Display reference such as "RES-001".
    pub reservation_id: String,
    pub amount: f64,
    pub currency: Currency,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub invoice_number: String,
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.guest_name.as_str(), self.invoice_number.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(
            PaymentStatus::Completed.presentation(),
            Presentation::new("Completed", Emphasis::Positive)
        );
        assert_eq!(PaymentStatus::Pending.presentation().emphasis, Emphasis::Outline);
        assert_eq!(PaymentStatus::Failed.presentation().emphasis, Emphasis::Negative);
        for status in PaymentStatus::all() {
            assert_eq!(PaymentStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(PaymentMethod::BankTransfer.display_name(), "Bank Transfer");
        assert_eq!(PaymentMethod::BankTransfer.code(), "bank_transfer");
        assert_eq!(PaymentMethod::Card.icon(), "credit-card");
    }
}
