//! Session picker: a display name, a role and a hotel. No credentials are checked.

use crate::layout::global_context::use_global_context;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::session::context::use_session_context;
use contracts::data::catalogs;
use contracts::system::session::{Session, UserRole};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session_context();
    let global = use_global_context();
    let navigate = use_navigate();

    let current = ctx.session.get_untracked();
    let user_name = RwSignal::new(current.user_name);
    let role = RwSignal::new(current.role);
    let hotel_id = RwSignal::new(current.hotel_id);
    let error_message = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name = user_name.get().trim().to_string();
        if name.is_empty() {
            error_message.set(Some("Enter a display name".to_string()));
            return;
        }
        error_message.set(None);

        ctx.sign_in(Session::new(name, role.get(), hotel_id.get()));
        navigate("/", Default::default());
    };

    let on_reset = move |_| {
        let fallback = global.settings.get_untracked().session.to_session();
        user_name.set(fallback.user_name.clone());
        role.set(fallback.role);
        hotel_id.set(fallback.hotel_id.clone());
        ctx.reset(fallback);
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"HotelFlow"</h1>
                    <h2>"Choose a session"</h2>
                    <p class="login-box__hint">
                        "The role only changes which menu sections are shown."
                    </p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="user_name">"Display name"</label>
                            <input
                                type="text"
                                id="user_name"
                                prop:value=move || user_name.get()
                                on:input=move |ev| user_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="role">"Role"</label>
                            <select
                                id="role"
                                prop:value=move || role.get().code()
                                on:change=move |ev| {
                                    if let Some(r) = UserRole::from_code(&event_target_value(&ev)) {
                                        role.set(r);
                                    }
                                }
                            >
                                {UserRole::all().into_iter().map(|r| view! {
                                    <option value=r.code()>{r.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <Show when=move || role.get().shows_hotel_selector()>
                            <div class="form-group">
                                <label for="hotel">"Hotel"</label>
                                <select
                                    id="hotel"
                                    prop:value=move || hotel_id.get()
                                    on:change=move |ev| hotel_id.set(event_target_value(&ev))
                                >
                                    {catalogs().hotel_options.iter().map(|h| view! {
                                        <option value=h.id.clone()>{h.name.clone()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </Show>

                        <div class="login-box__actions">
                            <button type="submit" class="button button--primary">"Continue"</button>
                            <button type="button" class="button button--ghost" on:click=on_reset>
                                "Reset to default"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
