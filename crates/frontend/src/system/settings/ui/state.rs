use contracts::domain::common::Currency;
use contracts::system::settings::AppSettings;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Hotel,
    Team,
    Notifications,
    Billing,
}

impl SettingsTab {
    pub fn display_name(&self) -> &'static str {
        match self {
            SettingsTab::Hotel => "Hotel",
            SettingsTab::Team => "Team",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Billing => "Billing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SettingsTab::Hotel => "building",
            SettingsTab::Team => "users",
            SettingsTab::Notifications => "bell",
            SettingsTab::Billing => "credit-card",
        }
    }

    pub fn all() -> [SettingsTab; 4] {
        [
            SettingsTab::Hotel,
            SettingsTab::Team,
            SettingsTab::Notifications,
            SettingsTab::Billing,
        ]
    }
}

/// (code, label) pairs for the currency select.
pub fn currency_options() -> Vec<(&'static str, &'static str)> {
    Currency::all()
        .into_iter()
        .map(|c| (c.code(), c.display_name()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct SettingsState {
    pub tab: RwSignal<SettingsTab>,
    /// Edited copy; the shared settings change only after a successful save.
    pub draft: RwSignal<AppSettings>,
}

pub fn create_state(current: AppSettings) -> SettingsState {
    SettingsState {
        tab: RwSignal::new(SettingsTab::default()),
        draft: RwSignal::new(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_labels_name_the_code_once() {
        let options = currency_options();
        assert_eq!(options[0], ("HTG", "HTG - Haitian Gourde"));
        for (code, label) in options {
            assert_eq!(label.matches(code).count(), 1);
        }
    }
}
