//! Hotels as seen from the platform (super admin) side.

use crate::domain::common::{Currency, Emphasis, Presentation};
use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelStatus {
    Active,
    Suspended,
    Trial,
}

impl HotelStatus {
    pub fn code(&self) -> &'static str {
        match self {
            HotelStatus::Active => "active",
            HotelStatus::Suspended => "suspended",
            HotelStatus::Trial => "trial",
        }
    }

    pub const fn presentation(self) -> Presentation {
        match self {
            HotelStatus::Active => Presentation::new("Active", Emphasis::Positive),
            HotelStatus::Suspended => Presentation::new("Suspended", Emphasis::Negative),
            HotelStatus::Trial => Presentation::new("Trial", Emphasis::Outline),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    #[default]
    Basic,
    Pro,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn code(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "basic",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Enterprise => "enterprise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Basic",
            SubscriptionPlan::Pro => "Pro",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }

    /// Tier accent used for the plan label.
    pub fn accent(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "plan--basic",
            SubscriptionPlan::Pro => "plan--pro",
            SubscriptionPlan::Enterprise => "plan--enterprise",
        }
    }
}

/// The one lifecycle button a hotel card offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelLifecycleAction {
    Suspend,
    Activate,
}

impl HotelLifecycleAction {
    pub fn label(&self) -> &'static str {
        match self {
            HotelLifecycleAction::Suspend => "Suspend",
            HotelLifecycleAction::Activate => "Activate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique; used as the record key.
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub status: HotelStatus,
    pub plan: SubscriptionPlan,
    pub total_rooms: u32,
    pub active_reservations: u32,
    /// Monthly recurring revenue.
    pub mrr: f64,
    pub currency: Currency,
}

impl Hotel {
    pub fn lifecycle_action(&self) -> HotelLifecycleAction {
        match self.status {
            HotelStatus::Active => HotelLifecycleAction::Suspend,
            HotelStatus::Suspended | HotelStatus::Trial => HotelLifecycleAction::Activate,
        }
    }
}

impl Searchable for Hotel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_hotel::seed::hotels;

    #[test]
    fn test_lifecycle_action_follows_status() {
        let actions: Vec<(String, HotelLifecycleAction)> = hotels()
            .into_iter()
            .map(|h| (h.name.clone(), h.lifecycle_action()))
            .collect();
        assert_eq!(actions[0].1, HotelLifecycleAction::Suspend);
        assert_eq!(actions[1].1, HotelLifecycleAction::Activate);
        assert_eq!(actions[2].1, HotelLifecycleAction::Activate);
    }

    #[test]
    fn test_status_table() {
        assert_eq!(HotelStatus::Active.presentation().emphasis, Emphasis::Positive);
        assert_eq!(HotelStatus::Suspended.presentation().emphasis, Emphasis::Negative);
        assert_eq!(HotelStatus::Trial.presentation().label, "Trial");
    }

    #[test]
    fn test_plan_wire_names() {
        let plan: SubscriptionPlan = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(plan, SubscriptionPlan::Enterprise);
        assert_eq!(plan.display_name(), "Enterprise");
    }
}
