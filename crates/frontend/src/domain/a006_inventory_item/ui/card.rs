use crate::shared::actions::use_actions;
use crate::shared::components::edit_panel::{EditField, EditPanel};
use crate::shared::components::notice::NoticeSlot;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::a006_inventory_item::InventoryItem;
use contracts::shared::format::format_amount;
use contracts::system::actions::{EntityKind, RecordRef};
use leptos::prelude::*;

#[component]
pub fn InventoryCard(item: InventoryItem, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let editing = RwSignal::new(false);
    let is_low = item.is_low_stock();

    let edit_fields = vec![
        EditField::new("current_stock", "Current stock", item.current_stock),
        EditField::new("alert_threshold", "Alert threshold", item.alert_threshold),
        EditField::new("price_per_unit", "Price per unit", item.price_per_unit),
    ];
    let edit_target = RecordRef::new(EntityKind::InventoryItem, item.product_name.as_str());
    let restock_label = format!("Restock {}", item.product_name);
    let product_name = item.product_name.clone();

    let bar_style = format!("width: {:.0}%", item.stock_bar_percentage());
    let restock_variant = if is_low { "primary" } else { "secondary" };
    let on_restock = Callback::new(move |_| {
        actions.run(notice, &restock_label, |a| a.restock(&product_name));
    });

    view! {
        <div class="card inventory-card" class:inventory-card--low=is_low>
            <div class="card__header inventory-card__header">
                <div class="inventory-card__title">
                    <div class="inventory-card__icon">{icon("package")}</div>
                    <div>
                        <h3>{item.product_name.clone()}</h3>
                        <p class="card__description">{item.category.clone()}</p>
                    </div>
                </div>
                <Show when=move || is_low>
                    <Badge variant="error">{icon("alert-triangle")}"Low Stock"</Badge>
                </Show>
            </div>
            <div class="card__body">
                <div class="inventory-card__stock">
                    <span class="muted">"Current Stock"</span>
                    <span class="inventory-card__amount">{format!("{} {}", item.current_stock, item.unit)}</span>
                </div>
                <div class="stock-bar">
                    <div class="stock-bar__fill" class:stock-bar__fill--low=is_low style=bar_style></div>
                </div>
                <p class="muted">{format!("Alert threshold: {} {}", item.alert_threshold, item.unit)}</p>
                <div class="inventory-card__price">
                    <span class="muted">{format!("Price per {}:", item.unit)}</span>
                    <span>{format_amount(item.price_per_unit, item.currency)}</span>
                </div>
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
                <Button variant=restock_variant size="sm" on_click=on_restock>
                    {icon("plus")}
                    "Restock"
                </Button>
            </div>
        </div>
    }
}
