//! Who is using the dashboard, for display purposes.
//!
//! The role chosen at login shapes the menu only. It is not authentication and
//! it is not authorization: routes are reachable regardless of role.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    #[default]
    Owner,
    Receptionist,
    RestaurantStaff,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Owner => "owner",
            UserRole::Receptionist => "receptionist",
            UserRole::RestaurantStaff => "restaurant_staff",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        UserRole::all().into_iter().find(|r| r.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Owner => "Owner",
            UserRole::Receptionist => "Receptionist",
            UserRole::RestaurantStaff => "Restaurant Staff",
        }
    }

    pub fn all() -> [UserRole; 4] {
        [
            UserRole::SuperAdmin,
            UserRole::Owner,
            UserRole::Receptionist,
            UserRole::RestaurantStaff,
        ]
    }

    pub fn shows_restaurant_section(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::RestaurantStaff)
    }

    pub fn shows_hotel_selector(&self) -> bool {
        !matches!(self, UserRole::SuperAdmin)
    }
}

/// Entry of the hotel selector in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_name: String,
    pub role: UserRole,
    pub hotel_id: String,
}

impl Session {
    pub fn new(user_name: impl Into<String>, role: UserRole, hotel_id: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            role,
            hotel_id: hotel_id.into(),
        }
    }

    /// Name of the selected hotel, if the id is one of `options`.
    pub fn hotel_name<'a>(&self, options: &'a [HotelOption]) -> Option<&'a str> {
        options
            .iter()
            .find(|h| h.id == self.hotel_id)
            .map(|h| h.name.as_str())
    }
}

pub(crate) fn hotel_options() -> Vec<HotelOption> {
    [
        ("hotel-1", "Le Grand Hotel"),
        ("hotel-2", "Beach Resort"),
        ("hotel-3", "Mountain Inn"),
    ]
    .into_iter()
    .map(|(id, name)| HotelOption {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_gates() {
        assert!(UserRole::Owner.shows_restaurant_section());
        assert!(UserRole::RestaurantStaff.shows_restaurant_section());
        assert!(!UserRole::Receptionist.shows_restaurant_section());
        assert!(!UserRole::SuperAdmin.shows_restaurant_section());

        assert!(!UserRole::SuperAdmin.shows_hotel_selector());
        for role in [UserRole::Owner, UserRole::Receptionist, UserRole::RestaurantStaff] {
            assert!(role.shows_hotel_selector());
        }
    }

    #[test]
    fn test_role_codes() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        let json = serde_json::to_string(&UserRole::RestaurantStaff).unwrap();
        assert_eq!(json, "\"restaurant_staff\"");
    }

    #[test]
    fn test_hotel_name_lookup() {
        let options = hotel_options();
        let session = Session::new("Jean Dupont", UserRole::Owner, "hotel-2");
        assert_eq!(session.hotel_name(&options), Some("Beach Resort"));
        let session = Session::new("Jean Dupont", UserRole::Owner, "hotel-9");
        assert_eq!(session.hotel_name(&options), None);
    }
}
