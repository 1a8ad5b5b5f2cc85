//! Sidebar with role-dependent menu sections and the hotel selector.

use crate::shared::icons::icon;
use crate::system::session::context::use_session;
use contracts::data::catalogs;
use contracts::shared::format::initials;
use contracts::system::navigation::{menu_sections, AppRoute};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
fn MenuLink(route: AppRoute) -> impl IntoView {
    let location = use_location();
    let path = route.path().unwrap_or("/");
    let is_active = move || location.pathname.get() == path;

    view! {
        <a
            href=path
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
        >
            <div class="app-sidebar__item-content">
                {icon(route.icon())}
                <span>{route.title()}</span>
            </div>
        </a>
    }
}

#[component]
fn HotelSelector() -> impl IntoView {
    let session = use_session();
    let options = catalogs().hotel_options.clone();

    view! {
        <select
            class="app-sidebar__hotel-select"
            prop:value=move || session.get().hotel_id
            on:change=move |ev| {
                let hotel_id = event_target_value(&ev);
                log::debug!("hotel selected: {}", hotel_id);
                session.update(|s| s.hotel_id = hotel_id);
            }
        >
            {options.into_iter().map(|hotel| view! {
                <option value=hotel.id.clone()>{hotel.name}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let role = move || session.get().role;

    let avatar = move || initials(&session.get().user_name);

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <div class="app-sidebar__brand">
                    <div class="app-sidebar__logo">{icon("building")}</div>
                    <div>
                        <div class="app-sidebar__brand-title">"HotelFlow"</div>
                        <div class="app-sidebar__brand-subtitle">"Management"</div>
                    </div>
                </div>
                <Show when=move || role().shows_hotel_selector()>
                    <HotelSelector />
                </Show>
            </div>

            {move || menu_sections(role()).into_iter().map(|section| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{section.title}</div>
                    {section.items.into_iter().map(|route| view! { <MenuLink route=route /> }).collect_view()}
                </div>
            }).collect_view()}

            <div class="app-sidebar__footer">
                <div class="app-sidebar__avatar">{avatar}</div>
                <div class="app-sidebar__user">
                    <div class="app-sidebar__user-name">{move || session.get().user_name}</div>
                    <div class="app-sidebar__user-role">{move || role().display_name()}</div>
                    <Show when=move || role().shows_hotel_selector()>
                        <div class="app-sidebar__user-hotel">
                            {move || {
                                session
                                    .with(|s| s.hotel_name(&catalogs().hotel_options).map(str::to_string))
                                    .unwrap_or_default()
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
