//! Settings page: hotel profile, regional options, team, notifications and billing.

mod state;

use self::state::{create_state, currency_options, SettingsState, SettingsTab};
use crate::layout::global_context::use_global_context;
use crate::shared::actions::use_actions;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::data::{catalogs, CATALOG_CURRENCY};
use contracts::domain::common::Currency;
use contracts::shared::format::format_amount;
use contracts::system::settings::{AppSettings, NotificationSettings, Timezone, PLAN_FEATURES};
use leptos::prelude::*;

/// Text input bound to one string field of the draft.
#[component]
fn DraftField(
    state: SettingsState,
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    get: fn(&AppSettings) -> &String,
    set: fn(&mut AppSettings, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                prop:value=move || state.draft.with(|d| get(d).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.draft.update(|d| set(d, value));
                }
            />
        </div>
    }
}

/// Switch bound to one notification flag of the draft.
#[component]
fn NotificationSwitch(
    state: SettingsState,
    label: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
    flag: fn(&mut NotificationSettings) -> &mut bool,
) -> impl IntoView {
    let checked = move || {
        let mut notifications = state.draft.with(|d| d.notifications);
        *flag(&mut notifications)
    };

    view! {
        <label class="switch-row">
            <div class="switch-row__text">
                <span class="switch-row__label">{label}</span>
                {hint.map(|h| view! { <span class="switch-row__hint">{h}</span> })}
            </div>
            <input
                type="checkbox"
                class="switch"
                prop:checked=checked
                on:change=move |_| state.draft.update(|d| {
                    let value = flag(&mut d.notifications);
                    *value = !*value;
                })
            />
        </label>
    }
}

#[component]
fn HotelTab(state: SettingsState, on_save: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Hotel Information"</h3>
                <p class="card__description">"Update your hotel's basic information"</p>
            </div>
            <div class="card__body">
                <DraftField state=state id="hotel-name" label="Hotel Name"
                    get=|d| &d.hotel.name set=|d, v| d.hotel.name = v />
                <div class="form-row">
                    <DraftField state=state id="email" label="Email" input_type="email"
                        get=|d| &d.hotel.email set=|d, v| d.hotel.email = v />
                    <DraftField state=state id="phone" label="Phone"
                        get=|d| &d.hotel.phone set=|d, v| d.hotel.phone = v />
                </div>
                <DraftField state=state id="address" label="Address"
                    get=|d| &d.hotel.address set=|d, v| d.hotel.address = v />
            </div>
            <div class="card__footer">
                <button class="button button--primary" on:click=move |_| on_save.run("Save hotel information")>
                    "Save Changes"
                </button>
            </div>
        </div>

        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Regional Settings"</h3>
                <p class="card__description">"Configure currency and timezone"</p>
            </div>
            <div class="card__body form-row">
                <div class="form-group">
                    <label for="currency">"Currency"</label>
                    <select
                        id="currency"
                        prop:value=move || state.draft.with(|d| d.regional.currency.code())
                        on:change=move |ev| {
                            if let Some(currency) = Currency::from_code(&event_target_value(&ev)) {
                                state.draft.update(|d| d.regional.currency = currency);
                            }
                        }
                    >
                        {currency_options().into_iter().map(|(code, label)| view! {
                            <option value=code>{label}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="timezone">"Timezone"</label>
                    <select
                        id="timezone"
                        prop:value=move || state.draft.with(|d| d.regional.timezone.code())
                        on:change=move |ev| {
                            if let Some(tz) = Timezone::from_code(&event_target_value(&ev)) {
                                state.draft.update(|d| d.regional.timezone = tz);
                            }
                        }
                    >
                        {Timezone::all().into_iter().map(|tz| view! {
                            <option value=tz.code()>{tz.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="card__footer">
                <button class="button button--primary" on:click=move |_| on_save.run("Save regional settings")>
                    "Save Changes"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TeamTab() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Team Members"</h3>
                <p class="card__description">"Hotel staff with access to the dashboard"</p>
            </div>
            <div class="card__body">
                {catalogs().team.iter().map(|member| view! {
                    <div class="team-row">
                        <div class="team-row__avatar">{contracts::shared::format::initials(&member.name)}</div>
                        <div>
                            <div class="team-row__name">{member.name.clone()}</div>
                            <div class="team-row__title">{member.title.clone()}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NotificationsTab(state: SettingsState, on_save: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Notification Preferences"</h3>
                <p class="card__description">"Choose how you want to receive notifications"</p>
            </div>
            <div class="card__body">
                <NotificationSwitch state=state label="Email Notifications"
                    hint="Receive notifications via email" flag=|n| &mut n.email />
                <NotificationSwitch state=state label="SMS Notifications"
                    hint="Receive notifications via SMS" flag=|n| &mut n.sms />
                <div class="card__section-label">"Notification Types"</div>
                <NotificationSwitch state=state label="New reservations"
                    flag=|n| &mut n.new_reservations />
                <NotificationSwitch state=state label="Low inventory alerts"
                    flag=|n| &mut n.low_inventory />
                <NotificationSwitch state=state label="Payment confirmations"
                    flag=|n| &mut n.payment_confirmations />
            </div>
            <div class="card__footer">
                <button class="button button--primary" on:click=move |_| on_save.run("Save notification preferences")>
                    "Save Preferences"
                </button>
            </div>
        </div>
    }
}

#[component]
fn BillingTab(state: SettingsState) -> impl IntoView {
    let billing = move || state.draft.with(|d| d.billing.clone());

    view! {
        {move || {
            let billing = billing();
            let plan = billing.plan;
            view! {
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Current Plan"</h3>
                        <p class="card__description">
                            {format!("You are currently on the {} plan", plan.display_name())}
                        </p>
                    </div>
                    <div class="card__body">
                        <div class="plan-box">
                            <div>
                                <h3 class=format!("plan-box__name {}", plan.accent())>
                                    {format!("{} Plan", plan.display_name())}
                                </h3>
                            </div>
                            <div class="plan-box__price">
                                <div class="plan-box__amount">{format_amount(billing.monthly_fee, CATALOG_CURRENCY)}</div>
                                <div class="plan-box__period">"per month"</div>
                            </div>
                        </div>
                        <h4>"Plan Features"</h4>
                        <ul class="plan-box__features">
                            {PLAN_FEATURES.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Payment Method"</h3>
                    </div>
                    <div class="card__body payment-method">
                        {icon("credit-card")}
                        <div>
                            <div class="payment-method__card">{billing.masked_card()}</div>
                            <div class="payment-method__expiry">{format!("Expires {}", billing.card_expiry)}</div>
                        </div>
                    </div>
                </div>
            }
        }}
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let global = use_global_context();
    let actions = use_actions();
    let notice = NoticeSlot::new();
    let state = create_state(global.settings.get_untracked());

    let on_save = Callback::new(move |label: &'static str| {
        let draft = state.draft.get_untracked();
        if actions.run(notice, label, |a| a.save_settings(draft.clone())) {
            global.settings.set(draft);
        }
    });

    let tab_button = move |tab: SettingsTab| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || state.tab.get() == tab
                on:click=move |_| state.tab.set(tab)
            >
                {icon(tab.icon())}
                {tab.display_name()}
            </button>
        }
    };

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" subtitle="Manage your hotel and account settings.".to_string() />
            <NoticeBanner notice=notice />

            <div class="tabs">
                {SettingsTab::all().into_iter().map(tab_button).collect_view()}
            </div>

            <div class="page__content">
                {move || match state.tab.get() {
                    SettingsTab::Hotel => view! { <HotelTab state=state on_save=on_save /> }.into_any(),
                    SettingsTab::Team => view! { <TeamTab /> }.into_any(),
                    SettingsTab::Notifications => {
                        view! { <NotificationsTab state=state on_save=on_save /> }.into_any()
                    }
                    SettingsTab::Billing => view! { <BillingTab state=state /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
