use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <div class="not-found__icon">{icon("alert-triangle")}</div>
                <h1>"Page Not Found"</h1>
                <p>"Nothing lives at " <code>{path}</code></p>
                <a class="button button--primary" href="/">"Back to Dashboard"</a>
            </div>
        </PageFrame>
    }
}
