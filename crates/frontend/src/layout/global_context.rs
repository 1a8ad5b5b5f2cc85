use crate::system::settings::storage::load_app_settings;
use contracts::system::settings::AppSettings;
use leptos::prelude::*;

/// Application-wide UI state shared by the shell and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Working copy of the settings; saved edits are not written back.
    pub settings: RwSignal<AppSettings>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            settings: RwSignal::new(load_app_settings()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
