//! Current user for display and menu shaping. There is no authentication.

use super::storage;
use crate::layout::global_context::AppGlobalContext;
use contracts::system::session::Session;
use contracts::system::settings::AppSettings;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    pub fn sign_in(&self, session: Session) {
        log::debug!(
            "session: {} as {}",
            session.user_name,
            session.role.code()
        );
        self.session.set(session);
    }

    /// Back to the session configured in settings.
    pub fn reset(&self, fallback: Session) {
        log::debug!("session reset");
        self.session.set(fallback);
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let fallback = use_context::<AppGlobalContext>()
        .map(|ctx| ctx.settings.get_untracked())
        .unwrap_or_else(AppSettings::default)
        .session
        .to_session();
    let initial = storage::load_session().unwrap_or_else(|| fallback.clone());

    let session = RwSignal::new(initial);
    // Hotel selector changes are kept across reloads; a reset leaves no entry
    Effect::new(move |_| storage::persist_session(&session.get(), &fallback));

    provide_context(SessionContext { session });

    children()
}

pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}

pub fn use_session() -> RwSignal<Session> {
    use_session_context().session
}
