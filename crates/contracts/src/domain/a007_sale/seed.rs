use super::aggregate::{Sale, SalePaymentMethod};
use crate::domain::common::{hm, Currency};
use chrono::NaiveTime;

#[allow(clippy::too_many_arguments)]
fn sale(
    id: &str,
    product_name: &str,
    quantity: u32,
    unit_price: f64,
    total: f64,
    payment_method: SalePaymentMethod,
    employee_name: &str,
    room_number: Option<&str>,
    timestamp: NaiveTime,
) -> Sale {
    Sale {
        id: id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        unit_price,
        total,
        currency: Currency::Htg,
        payment_method,
        employee_name: employee_name.to_string(),
        room_number: room_number.map(str::to_string),
        timestamp,
    }
}

pub(crate) fn sales() -> Vec<Sale> {
    vec![
        sale(
            "sale-001",
            "Grilled Chicken Plate",
            2,
            450.0,
            900.0,
            SalePaymentMethod::RoomCharge,
            "Michel Jean",
            Some("205"),
            hm(14, 35),
        ),
        sale(
            "sale-002",
            "Caesar Salad",
            1,
            320.0,
            320.0,
            SalePaymentMethod::Cash,
            "Marie Laurent",
            None,
            hm(13, 20),
        ),
        sale(
            "sale-003",
            "Fresh Orange Juice",
            3,
            120.0,
            360.0,
            SalePaymentMethod::Card,
            "Pierre Duval",
            None,
            hm(12, 15),
        ),
        sale(
            "sale-004",
            "Fresh Fish",
            1,
            550.0,
            550.0,
            SalePaymentMethod::RoomCharge,
            "Michel Jean",
            Some("102"),
            hm(11, 45),
        ),
        sale(
            "sale-005",
            "Chocolate Cake",
            2,
            280.0,
            560.0,
            SalePaymentMethod::Cash,
            "Marie Laurent",
            None,
            hm(10, 30),
        ),
    ]
}
