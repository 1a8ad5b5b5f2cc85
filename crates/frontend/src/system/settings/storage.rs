//! Settings source: an optional TOML override in localStorage, else the embedded defaults.
use contracts::system::settings::{load_settings, AppSettings, DEFAULT_SETTINGS};
use web_sys::window;

/// localStorage key holding a complete settings document.
pub const SETTINGS_OVERRIDE_KEY: &str = "hotel_settings_toml";

fn read_override() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(SETTINGS_OVERRIDE_KEY)
        .ok()?
}

/// Parses `override_doc` when present; a missing or invalid document falls back
/// to the embedded defaults.
pub fn resolve_settings(override_doc: Option<&str>) -> AppSettings {
    if let Some(doc) = override_doc {
        match load_settings(doc) {
            Ok(settings) => {
                log::info!("settings: loaded override from {}", SETTINGS_OVERRIDE_KEY);
                return settings;
            }
            Err(err) => log::warn!("settings: ignoring override: {:#}", err),
        }
    }

    match load_settings(DEFAULT_SETTINGS) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("settings: embedded document rejected: {:#}", err);
            AppSettings::default()
        }
    }
}

/// Settings the app starts with.
pub fn load_app_settings() -> AppSettings {
    resolve_settings(read_override().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Currency;

    #[test]
    fn test_without_override_uses_embedded_document() {
        assert_eq!(resolve_settings(None), AppSettings::default());
    }

    #[test]
    fn test_valid_override_is_applied() {
        let doc = DEFAULT_SETTINGS
            .replace("name = \"Le Grand Hotel\"", "name = \"Mountain Inn\"")
            .replace("currency = \"HTG\"", "currency = \"USD\"");
        let settings = resolve_settings(Some(&doc));
        assert_eq!(settings.hotel.name, "Mountain Inn");
        assert_eq!(settings.regional.currency, Currency::Usd);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(resolve_settings(Some("[hotel]\nname = 3")), AppSettings::default());
        let empty_name = DEFAULT_SETTINGS.replace("name = \"Le Grand Hotel\"", "name = \"\"");
        assert_eq!(resolve_settings(Some(&empty_name)), AppSettings::default());
    }
}
