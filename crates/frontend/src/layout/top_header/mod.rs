//! Top bar: sidebar toggle, page title, notifications, theme toggle and user.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::session::context::use_session;
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Unread count shown on the bell.
const PENDING_NOTIFICATIONS: usize = 3;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let location = use_location();

    let page_title = move || AppRoute::from_path(&location.pathname.get()).title();
    let is_sidebar_visible = move || ctx.left_open.get();

    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("navigate: {} ({:?})", path, AppRoute::from_path(&path));
    });

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn top-header__notifications" title="Notifications">
                    {icon("bell")}
                    <span class="badge badge--primary top-header__count">{PENDING_NOTIFICATIONS}</span>
                </button>

                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.get().user_name}</span>
                </div>

                <a class="top-header__icon-btn" href="/login" title="Switch user">
                    {icon("log-out")}
                </a>
            </div>
        </div>
    }
}
