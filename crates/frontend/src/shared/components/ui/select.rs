use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

/// Select options led by the "all" sentinel entry.
pub fn options_with_all<'a>(
    all_label: &'a str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Vec<(String, String)> {
    std::iter::once((ALL_SENTINEL, all_label))
        .chain(options)
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// Select with (value, label) options
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            id=move || id.get()
            class=move || format!("form__select {}", additional_class())
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_option_comes_first() {
        let options = options_with_all("All Rooms", [("available", "Available")]);
        assert_eq!(
            options,
            vec![
                ("all".to_string(), "All Rooms".to_string()),
                ("available".to_string(), "Available".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_from_owned_labels() {
        let all_label = format!("All {}", "Categories");
        let categories = vec!["Grains".to_string(), "Meat".to_string()];
        let options = options_with_all(&all_label, categories.iter().map(|c| (c.as_str(), c.as_str())));
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].1, "All Categories");
        assert_eq!(options[2], ("Meat".to_string(), "Meat".to_string()));
    }
}
