use super::aggregate::{Room, RoomStatus};
use crate::domain::common::{ymd, Currency};

fn room(number: &str, room_type: &str, capacity: u32, price: f64, status: RoomStatus) -> Room {
    Room {
        number: number.to_string(),
        room_type: room_type.to_string(),
        capacity,
        price_per_night: price,
        currency: Currency::Htg,
        status,
        guest_name: None,
        checkout_date: None,
    }
}

fn occupied(mut room: Room, guest: &str, checkout: chrono::NaiveDate) -> Room {
    room.guest_name = Some(guest.to_string());
    room.checkout_date = Some(checkout);
    room
}

pub(crate) fn rooms() -> Vec<Room> {
    vec![
        room("101", "Standard Double", 2, 1500.0, RoomStatus::Available),
        occupied(
            room("102", "Standard Double", 2, 1500.0, RoomStatus::Occupied),
            "Marie Laurent",
            ymd(2025, 11, 5),
        ),
        occupied(
            room("205", "Deluxe Suite", 4, 3500.0, RoomStatus::Occupied),
            "Pierre Toussaint",
            ymd(2025, 11, 6),
        ),
        room("206", "Deluxe Suite", 4, 3500.0, RoomStatus::Available),
        room("310", "Executive Suite", 3, 2800.0, RoomStatus::Cleaning),
        room("311", "Executive Suite", 3, 2800.0, RoomStatus::Maintenance),
    ]
}
