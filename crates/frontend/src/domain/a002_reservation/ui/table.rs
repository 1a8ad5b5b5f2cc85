//! Reservation rows with per-status actions. Shared by the reservations page
//! and the dashboard.

use crate::shared::actions::use_actions;
use crate::shared::components::notice::NoticeSlot;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::domain::a002_reservation::{Reservation, ReservationAction};
use contracts::domain::common::display_date;
use contracts::shared::format::format_amount;
use contracts::system::actions::{EntityKind, RecordRef};
use leptos::prelude::*;

#[component]
fn ActionButton(reservation_id: String, action: ReservationAction, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let (icon_name, title) = match action {
        ReservationAction::View => ("eye", "View"),
        ReservationAction::CheckIn => ("check-circle", "Check in"),
        ReservationAction::Cancel => ("x", "Cancel"),
    };
    let label = format!("{} {}", title, reservation_id);

    let on_click = move |_| {
        let id = reservation_id.as_str();
        actions.run(notice, &label, |a| match action {
            ReservationAction::View => a.view(RecordRef::new(EntityKind::Reservation, id)),
            ReservationAction::CheckIn => a.check_in(id),
            ReservationAction::Cancel => a.cancel(id),
        });
    };

    view! {
        <button class="button button--ghost button--icon" title=title on:click=on_click>
            {icon(icon_name)}
        </button>
    }
}

#[component]
pub fn ReservationTable(
    #[prop(into)] reservations: Signal<Vec<Reservation>>,
    notice: NoticeSlot,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Guest Name"</th>
                        <th>"Room"</th>
                        <th>"Check-in"</th>
                        <th>"Check-out"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th class="table__cell--right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || reservations.get()
                        key=|r| r.id.clone()
                        children=move |r| {
                            let buttons = r
                                .actions()
                                .into_iter()
                                .map(|action| view! {
                                    <ActionButton reservation_id=r.id.clone() action=action notice=notice />
                                })
                                .collect_view();
                            view! {
                                <tr>
                                    <td class="table__cell--strong">{r.guest_name.clone()}</td>
                                    <td class="table__cell--mono">{r.room_number.clone()}</td>
                                    <td>{display_date(r.check_in)}</td>
                                    <td>{display_date(r.check_out)}</td>
                                    <td class="table__cell--mono">{format_amount(r.total_amount, r.currency)}</td>
                                    <td><StatusBadge presentation=r.status.presentation() /></td>
                                    <td class="table__cell--right">
                                        <div class="table__actions">{buttons}</div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
