use super::aggregate::{Hotel, HotelStatus, SubscriptionPlan};
use crate::domain::common::Currency;

#[allow(clippy::too_many_arguments)]
fn hotel(
    name: &str,
    address: &str,
    phone: &str,
    email: &str,
    status: HotelStatus,
    plan: SubscriptionPlan,
    total_rooms: u32,
    active_reservations: u32,
    mrr: f64,
) -> Hotel {
    Hotel {
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        status,
        plan,
        total_rooms,
        active_reservations,
        mrr,
        currency: Currency::Htg,
    }
}

pub(crate) fn hotels() -> Vec<Hotel> {
    vec![
        hotel(
            "Le Grand Hotel",
            "Port-au-Prince, Haiti",
            "+509 2812-3456",
            "info@legrandhotel.ht",
            HotelStatus::Active,
            SubscriptionPlan::Pro,
            45,
            28,
            2200.0,
        ),
        hotel(
            "Beach Resort",
            "Jacmel, Haiti",
            "+509 2812-7890",
            "contact@beachresort.ht",
            HotelStatus::Trial,
            SubscriptionPlan::Basic,
            18,
            12,
            800.0,
        ),
        hotel(
            "Mountain Inn",
            "Kenscoff, Haiti",
            "+509 2812-4567",
            "info@mountaininn.ht",
            HotelStatus::Suspended,
            SubscriptionPlan::Basic,
            12,
            0,
            0.0,
        ),
        hotel(
            "Coastal Paradise",
            "Cap-Haïtien, Haiti",
            "+509 2812-9012",
            "info@coastalparadise.ht",
            HotelStatus::Active,
            SubscriptionPlan::Enterprise,
            62,
            45,
            4500.0,
        ),
        hotel(
            "City Center Hotel",
            "Port-au-Prince, Haiti",
            "+509 2812-5678",
            "contact@citycenter.ht",
            HotelStatus::Active,
            SubscriptionPlan::Pro,
            35,
            22,
            2200.0,
        ),
        hotel(
            "Tropical Oasis",
            "Les Cayes, Haiti",
            "+509 2812-3333",
            "info@tropicaloasis.ht",
            HotelStatus::Trial,
            SubscriptionPlan::Basic,
            20,
            8,
            800.0,
        ),
    ]
}
