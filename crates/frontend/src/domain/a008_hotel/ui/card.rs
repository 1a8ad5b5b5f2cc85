use crate::shared::actions::use_actions;
use crate::shared::components::notice::NoticeSlot;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::icons::icon;
use contracts::domain::a008_hotel::{Hotel, HotelLifecycleAction};
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
pub fn HotelCard(hotel: Hotel, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let lifecycle = hotel.lifecycle_action();
    let label = format!("{} {}", lifecycle.label(), hotel.name);
    let hotel_name = hotel.name.clone();

    let on_lifecycle = Callback::new(move |_| {
        actions.run(notice, &label, |a| match lifecycle {
            HotelLifecycleAction::Suspend => a.suspend(&hotel_name),
            HotelLifecycleAction::Activate => a.activate(&hotel_name),
        });
    });
    let button_variant = match lifecycle {
        HotelLifecycleAction::Suspend => "danger",
        HotelLifecycleAction::Activate => "primary",
    };

    view! {
        <div class="card hotel-card">
            <div class="card__header hotel-card__header">
                <div class="hotel-card__title">
                    <div class="hotel-card__icon">{icon("building")}</div>
                    <div>
                        <h3>{hotel.name.clone()}</h3>
                        <span class=format!("plan {}", hotel.plan.accent())>{hotel.plan.display_name()}</span>
                    </div>
                </div>
                <StatusBadge presentation=hotel.status.presentation() />
            </div>
            <div class="card__body">
                <div class="hotel-card__contact">
                    <div>{icon("map-pin")}<span>{hotel.address.clone()}</span></div>
                    <div>{icon("phone")}<span>{hotel.phone.clone()}</span></div>
                    <div>{icon("mail")}<span>{hotel.email.clone()}</span></div>
                </div>
                <div class="hotel-card__stats">
                    <div>
                        <span class="muted">"Rooms"</span>
                        <span class="hotel-card__stat">{hotel.total_rooms}</span>
                    </div>
                    <div>
                        <span class="muted">"Reservations"</span>
                        <span class="hotel-card__stat">{hotel.active_reservations}</span>
                    </div>
                    <div>
                        <span class="muted">"MRR"</span>
                        <span class="hotel-card__stat">{format_amount(hotel.mrr, hotel.currency)}</span>
                    </div>
                </div>
            </div>
            <div class="card__footer">
                <Button variant=button_variant size="sm" on_click=on_lifecycle>
                    {lifecycle.label()}
                </Button>
            </div>
        </div>
    }
}
