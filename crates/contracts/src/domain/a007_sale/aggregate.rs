use crate::domain::common::{Currency, Emphasis, Presentation};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalePaymentMethod {
    Cash,
    Card,
    RoomCharge,
}

impl SalePaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            SalePaymentMethod::Cash => "cash",
            SalePaymentMethod::Card => "card",
            SalePaymentMethod::RoomCharge => "room_charge",
        }
    }

    pub const fn presentation(self) -> Presentation {
        match self {
            SalePaymentMethod::Cash => Presentation::new("Cash", Emphasis::Positive),
            SalePaymentMethod::Card => Presentation::new("Card", Emphasis::Neutral),
            SalePaymentMethod::RoomCharge => Presentation::new("Room Charge", Emphasis::Outline),
        }
    }
}

/// Period selector on the sales page. It only changes the selection; the
/// listed sales are not re-queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalesPeriod {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
}

impl SalesPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            SalesPeriod::Today => "today",
            SalesPeriod::Yesterday => "yesterday",
            SalesPeriod::Week => "week",
            SalesPeriod::Month => "month",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(SalesPeriod::Today),
            "yesterday" => Some(SalesPeriod::Yesterday),
            "week" => Some(SalesPeriod::Week),
            "month" => Some(SalesPeriod::Month),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SalesPeriod::Today => "Today",
            SalesPeriod::Yesterday => "Yesterday",
            SalesPeriod::Week => "This Week",
            SalesPeriod::Month => "This Month",
        }
    }

    pub fn all() -> [SalesPeriod; 4] {
        [
            SalesPeriod::Today,
            SalesPeriod::Yesterday,
            SalesPeriod::Week,
            SalesPeriod::Month,
        ]
    }
}

/// Restaurant sale line. `total` is recorded as given, not recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
    pub currency: Currency,
    pub payment_method: SalePaymentMethod,
    pub employee_name: String,
    /// Set for room charges.
    pub room_number: Option<String>,
    pub timestamp: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_table() {
        assert_eq!(
            SalePaymentMethod::RoomCharge.presentation(),
            Presentation::new("Room Charge", Emphasis::Outline)
        );
        assert_eq!(SalePaymentMethod::Cash.presentation().emphasis, Emphasis::Positive);
        assert_eq!(SalePaymentMethod::Card.presentation().emphasis, Emphasis::Neutral);
    }

    #[test]
    fn test_period_codes() {
        for period in SalesPeriod::all() {
            assert_eq!(SalesPeriod::from_code(period.code()), Some(period));
        }
        assert_eq!(SalesPeriod::default(), SalesPeriod::Today);
    }
}
