use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::actions::ActionsContext;
use crate::shared::theme::ThemeProvider;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Every page button goes through this capability set
    provide_context(ActionsContext::logging());

    view! {
        <ThemeProvider>
            <SessionProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </SessionProvider>
        </ThemeProvider>
    }
}
