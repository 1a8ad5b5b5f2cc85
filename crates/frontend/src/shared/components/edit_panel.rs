//! Inline editor that submits the changed fields of one record.

use crate::shared::actions::use_actions;
use crate::shared::components::notice::NoticeSlot;
use contracts::system::actions::{RecordPatch, RecordRef};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    /// Patch key
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl EditField {
    pub fn new(key: &'static str, label: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            label,
            value: value.to_string(),
        }
    }
}

/// Fields whose edited value differs from the original, trimmed.
pub fn changed_fields(fields: &[EditField], edited: &[String]) -> RecordPatch {
    fields
        .iter()
        .zip(edited)
        .filter(|(field, value)| value.trim() != field.value)
        .map(|(field, value)| (field.key.to_string(), value.trim().to_string()))
        .collect()
}

#[component]
pub fn EditPanel(
    target: RecordRef,
    fields: Vec<EditField>,
    notice: NoticeSlot,
    on_close: Callback<()>,
) -> impl IntoView {
    let actions = use_actions();
    let values: Vec<RwSignal<String>> = fields
        .iter()
        .map(|f| RwSignal::new(f.value.clone()))
        .collect();

    let inputs = fields
        .iter()
        .zip(values.iter().copied())
        .map(|(field, value)| {
            view! {
                <div class="form-group">
                    <label>{field.label}</label>
                    <input
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view();

    let fields = StoredValue::new(fields);
    let label = format!("Edit {}", target);
    let on_save = move |_| {
        let edited: Vec<String> = values.iter().map(|v| v.get_untracked()).collect();
        let patch = fields.with_value(|f| changed_fields(f, &edited));
        let target = target.clone();
        if actions.run(notice, &label, move |a| a.edit(target, patch)) {
            on_close.run(());
        }
    };

    view! {
        <div class="edit-panel">
            {inputs}
            <div class="edit-panel__actions">
                <button class="button button--primary button--small" on:click=on_save>"Save"</button>
                <button class="button button--ghost button--small" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<EditField> {
        vec![
            EditField::new("room_type", "Type", "Deluxe Suite"),
            EditField::new("price_per_night", "Price per night", 3500),
        ]
    }

    #[test]
    fn test_only_changed_fields_are_sent() {
        let edited = vec!["Deluxe Suite".to_string(), " 3800 ".to_string()];
        let patch = changed_fields(&fields(), &edited);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("price_per_night").map(String::as_str), Some("3800"));
    }

    #[test]
    fn test_untouched_form_gives_empty_patch() {
        let edited = vec!["Deluxe Suite".to_string(), "3500".to_string()];
        assert!(changed_fields(&fields(), &edited).is_empty());
    }
}
