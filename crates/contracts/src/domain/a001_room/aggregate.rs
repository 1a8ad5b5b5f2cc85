use crate::domain::common::{Currency, Emphasis, Presentation};
use crate::shared::filter::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Cleaning => "cleaning",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "maintenance" => Some(RoomStatus::Maintenance),
            "cleaning" => Some(RoomStatus::Cleaning),
            _ => None,
        }
    }

    /// Order used by the status selector.
    pub fn all() -> [RoomStatus; 4] {
        [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Cleaning,
            RoomStatus::Maintenance,
        ]
    }

    pub const fn presentation(self) -> Presentation {
        match self {
            RoomStatus::Available => Presentation::new("Available", Emphasis::Positive),
            RoomStatus::Occupied => Presentation::new("Occupied", Emphasis::Neutral),
            RoomStatus::Maintenance => Presentation::new("Maintenance", Emphasis::Negative),
            RoomStatus::Cleaning => Presentation::new("Cleaning", Emphasis::Outline),
        }
    }
}

/// Hotel room. `number` is unique within the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub number: String,
    pub room_type: String,
    pub capacity: u32,
    pub price_per_night: f64,
    pub currency: Currency,
    pub status: RoomStatus,
    /// Conventionally present only while occupied.
    pub guest_name: Option<String>,
    pub checkout_date: Option<NaiveDate>,
}

/// Guest block shown on an occupied room card.
#[derive(Debug, Clone, PartialEq)]
pub struct Occupant<'a> {
    pub guest_name: &'a str,
    pub checkout_date: Option<NaiveDate>,
}

impl Room {
    /// The current guest, only when the room is occupied and a guest is recorded.
    pub fn occupant(&self) -> Option<Occupant<'_>> {
        if self.status != RoomStatus::Occupied {
            return None;
        }
        self.guest_name.as_deref().map(|guest_name| Occupant {
            guest_name,
            checkout_date: self.checkout_date,
        })
    }
}

impl Searchable for Room {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.room_type.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(status: RoomStatus, guest: Option<&str>) -> Room {
        Room {
            number: "102".into(),
            room_type: "Standard Double".into(),
            capacity: 2,
            price_per_night: 1500.0,
            currency: Currency::Htg,
            status,
            guest_name: guest.map(Into::into),
            checkout_date: None,
        }
    }

    #[test]
    fn test_status_table() {
        assert_eq!(
            RoomStatus::Available.presentation(),
            Presentation::new("Available", Emphasis::Positive)
        );
        assert_eq!(RoomStatus::Occupied.presentation().emphasis, Emphasis::Neutral);
        assert_eq!(RoomStatus::Maintenance.presentation().emphasis, Emphasis::Negative);
        assert_eq!(RoomStatus::Cleaning.presentation().emphasis, Emphasis::Outline);
    }

    #[test]
    fn test_code_round_trip() {
        for status in RoomStatus::all() {
            assert_eq!(RoomStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RoomStatus::from_code("all"), None);
    }

    #[test]
    fn test_occupant_only_when_occupied() {
        assert!(room(RoomStatus::Occupied, Some("Marie Laurent")).occupant().is_some());
        assert!(room(RoomStatus::Occupied, None).occupant().is_none());
        assert!(room(RoomStatus::Available, Some("Stale Guest")).occupant().is_none());
    }
}
