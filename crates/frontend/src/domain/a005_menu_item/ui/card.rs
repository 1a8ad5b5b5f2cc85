use crate::shared::actions::use_actions;
use crate::shared::components::edit_panel::{EditField, EditPanel};
use crate::shared::components::notice::NoticeSlot;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::domain::a005_menu_item::MenuItem;
use contracts::shared::format::format_amount;
use contracts::system::actions::{EntityKind, RecordRef};
use leptos::prelude::*;

#[component]
pub fn MenuItemCard(item: MenuItem, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let editing = RwSignal::new(false);
    let target = RecordRef::new(EntityKind::MenuItem, item.id.as_str());

    let edit_fields = vec![
        EditField::new("name", "Name", &item.name),
        EditField::new("price", "Price", item.price),
        EditField::new("description", "Description", &item.description),
    ];
    let edit_target = target.clone();
    let delete_label = format!("Delete {}", item.name);
    let toggle_label = format!("Availability of {}", item.name);
    let item_id = item.id.clone();

    view! {
        <div class="card menu-card">
            <div class="card__header menu-card__header">
                <div>
                    <h3>{item.name.clone()}</h3>
                    <p class="card__description">{item.description.clone()}</p>
                </div>
                <StatusBadge presentation=item.availability() />
            </div>
            <div class="card__body">
                <div class="menu-card__row">
                    <span class="muted">{item.category.clone()}</span>
                    <span class="menu-card__price">{format_amount(item.price, item.currency)}</span>
                </div>
                <label class="switch-row">
                    <input
                        type="checkbox"
                        class="switch"
                        prop:checked=item.available
                        on:change=move |_| {
                            actions.run(notice, &toggle_label, |a| a.toggle_availability(&item_id));
                        }
                    />
                    <span>"Available"</span>
                </label>
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
