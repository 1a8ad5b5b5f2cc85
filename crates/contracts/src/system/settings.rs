//! Application settings, loaded from TOML.
//!
//! The defaults are embedded in the crate. An override document must be
//! complete; it is parsed and then validated.

use crate::domain::a008_hotel::SubscriptionPlan;
use crate::domain::common::Currency;
use crate::system::session::{Session, UserRole};
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration embedded in the crate
pub const DEFAULT_SETTINGS: &str = r#"
[hotel]
name = "Le Grand Hotel"
email = "info@legrandhotel.ht"
phone = "+509 2812-3456"
address = "123 Main Street, Port-au-Prince, Haiti"

[regional]
currency = "HTG"
timezone = "America/Port-au-Prince"
business_date = "2025-11-03"

[notifications]
email = true
sms = false
new_reservations = true
low_inventory = true
payment_confirmations = true

[session]
user_name = "Jean Dupont"
role = "owner"
hotel_id = "hotel-1"

[billing]
plan = "pro"
monthly_fee = 2200.0
card_last4 = "4242"
card_expiry = "12/2025"

[reports]
operating_expenses = 15200.0
"#;

/// Features listed on the billing tab for the current plan.
pub const PLAN_FEATURES: [&str; 5] = [
    "Unlimited rooms",
    "Restaurant management",
    "Advanced reports",
    "Email support",
    "Multi-user access",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub hotel: HotelProfile,
    pub regional: RegionalSettings,
    pub notifications: NotificationSettings,
    pub session: SessionSettings,
    pub billing: BillingSettings,
    pub reports: ReportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    #[serde(rename = "America/Port-au-Prince")]
    PortAuPrince,
    #[serde(rename = "America/New_York")]
    NewYork,
}

impl Timezone {
    pub fn code(&self) -> &'static str {
        match self {
            Timezone::PortAuPrince => "America/Port-au-Prince",
            Timezone::NewYork => "America/New_York",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Timezone::all().into_iter().find(|tz| tz.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Timezone::PortAuPrince => "Port-au-Prince (EST)",
            Timezone::NewYork => "New York (EST)",
        }
    }

    pub fn all() -> [Timezone; 2] {
        [Timezone::PortAuPrince, Timezone::NewYork]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalSettings {
    pub currency: Currency,
    pub timezone: Timezone,
    /// The date treated as "today" by the KPIs.
    pub business_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub new_reservations: bool,
    pub low_inventory: bool,
    pub payment_confirmations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub user_name: String,
    pub role: UserRole,
    pub hotel_id: String,
}

impl SessionSettings {
    pub fn to_session(&self) -> Session {
        Session::new(self.user_name.clone(), self.role, self.hotel_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSettings {
    pub plan: SubscriptionPlan,
    pub monthly_fee: f64,
    pub card_last4: String,
    pub card_expiry: String,
}

impl BillingSettings {
    pub fn masked_card(&self) -> String {
        format!("•••• •••• •••• {}", self.card_last4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    pub operating_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("hotel name must not be empty")]
    EmptyHotelName,
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.hotel.name.trim().is_empty() {
            return Err(SettingsError::EmptyHotelName);
        }
        if !is_plausible_email(&self.hotel.email) {
            return Err(SettingsError::InvalidEmail(self.hotel.email.clone()));
        }
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        toml::from_str(DEFAULT_SETTINGS).expect("embedded settings are valid")
    }
}

/// Parses and validates a settings document.
pub fn load_settings(contents: &str) -> anyhow::Result<AppSettings> {
    let settings: AppSettings =
        toml::from_str(contents).context("Failed to parse settings document")?;
    settings.validate().context("Settings failed validation")?;
    Ok(settings)
}

/// One `@`, a non-empty local part and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    #[test]
    fn test_default_settings_load() {
        let settings = load_settings(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.hotel.name, "Le Grand Hotel");
        assert_eq!(settings.regional.currency, Currency::Htg);
        assert_eq!(settings.regional.timezone, Timezone::PortAuPrince);
        assert_eq!(settings.regional.business_date, ymd(2025, 11, 3));
        assert!(settings.notifications.email);
        assert!(!settings.notifications.sms);
        assert_eq!(settings.session.role, UserRole::Owner);
        assert_eq!(settings.billing.plan, SubscriptionPlan::Pro);
        assert_eq!(settings.reports.operating_expenses, 15200.0);
    }

    #[test]
    fn test_override_document() {
        let doc = DEFAULT_SETTINGS
            .replace("currency = \"HTG\"", "currency = \"USD\"")
            .replace("role = \"owner\"", "role = \"receptionist\"");
        let settings = load_settings(&doc).unwrap();
        assert_eq!(settings.regional.currency, Currency::Usd);
        assert_eq!(settings.session.to_session().role, UserRole::Receptionist);
    }

    #[test]
    fn test_unknown_enum_value_is_a_parse_error() {
        let doc = DEFAULT_SETTINGS.replace("role = \"owner\"", "role = \"janitor\"");
        let err = load_settings(&doc).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = AppSettings::default();
        settings.hotel.name = "   ".into();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyHotelName));

        let mut settings = AppSettings::default();
        settings.hotel.email = "info.legrandhotel.ht".into();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidEmail("info.legrandhotel.ht".into()))
        );

        let doc = DEFAULT_SETTINGS.replace("name = \"Le Grand Hotel\"", "name = \"\"");
        let err = load_settings(&doc).unwrap_err();
        assert!(err.downcast_ref::<SettingsError>().is_some());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("info@legrandhotel.ht"));
        assert!(!is_plausible_email("@legrandhotel.ht"));
        assert!(!is_plausible_email("info@localhost"));
        assert!(!is_plausible_email("info@a@b.ht"));
        assert!(!is_plausible_email("info@.ht"));
        assert!(!is_plausible_email("in fo@hotel.ht"));
    }

    #[test]
    fn test_masked_card() {
        assert_eq!(AppSettings::default().billing.masked_card(), "•••• •••• •••• 4242");
    }
}
