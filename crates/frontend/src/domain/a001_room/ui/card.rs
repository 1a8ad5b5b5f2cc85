use crate::shared::actions::use_actions;
use crate::shared::components::edit_panel::{EditField, EditPanel};
use crate::shared::components::notice::NoticeSlot;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::domain::a001_room::Room;
use contracts::domain::common::display_date;
use contracts::shared::format::format_amount;
use contracts::system::actions::{EntityKind, RecordRef};
use leptos::prelude::*;

#[component]
pub fn RoomCard(room: Room, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let editing = RwSignal::new(false);
    let target = RecordRef::new(EntityKind::Room, room.number.as_str());

    let occupant = room.occupant().map(|occupant| {
        view! {
            <div class="room-card__guest">
                <div>"Guest: " <strong>{occupant.guest_name.to_string()}</strong></div>
                {occupant.checkout_date.map(|date| view! {
                    <div class="room-card__checkout">{format!("Checkout: {}", display_date(date))}</div>
                })}
            </div>
        }
    });

    let edit_fields = vec![
        EditField::new("room_type", "Type", &room.room_type),
        EditField::new("capacity", "Capacity", room.capacity),
        EditField::new("price_per_night", "Price per night", room.price_per_night),
    ];
    let edit_target = target.clone();
    let delete_label = format!("Delete {}", target);

    view! {
        <div class="card room-card">
            <div class="card__header room-card__header">
                <div class="room-card__title">
                    <div class="room-card__icon">{icon("bed")}</div>
                    <div>
                        <h3>{format!("Room {}", room.number)}</h3>
                        <p class="card__description">{room.room_type.clone()}</p>
                    </div>
                </div>
                <StatusBadge presentation=room.status.presentation() />
            </div>
            <div class="card__body">
                <div class="room-card__row">
                    {icon("users")}
                    <span class="muted">"Capacity:"</span>
                    <span>{format!("{} guests", room.capacity)}</span>
                </div>
                <div class="room-card__row">
                    <span class="muted">"Price:"</span>
                    <span class="room-card__price">{format_amount(room.price_per_night, room.currency)}</span>
                    <span class="muted">"/night"</span>
                </div>
                {occupant}
                <Show when=move || editing.get()>
                    <EditPanel
                        target=edit_target.clone()
                        fields=edit_fields.clone()
                        notice=notice
                        on_close=Callback::new(move |_| editing.set(false))
                    />
                </Show>
            </div>
            <div class="card__footer">
                <button class="button button--secondary button--small" on:click=move |_| editing.update(|e| *e = !*e)>
                    {icon("edit")}
                    "Edit"
                </button>
                <button
                    class="button button--ghost button--small"
                    title="Delete"
                    on:click=move |_| {
                        actions.run(notice, &delete_label, |a| a.delete(target.clone()));
                    }
                >
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}
