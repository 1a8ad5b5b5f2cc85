/// Shared list helpers: debounced search input and match highlighting.
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Delay between the last keystroke and the filter update.
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Splits `text` into `(segment, is_match)` pieces for a case-insensitive query.
///
/// Texts with a character whose lowercase form has a different byte width
/// are returned whole, since offsets into the lowercase copy would not line up.
pub fn match_segments<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle = query.to_lowercase();
    if needle.is_empty() || !lowercase_keeps_width(text) {
        return vec![(text, false)];
    }
    let haystack = text.to_lowercase();

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            segments.push((&text[last..start], false));
        }
        segments.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        segments.push((&text[last..], false));
    }
    segments
}

fn lowercase_keeps_width(text: &str) -> bool {
    text.chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8())
}

/// Renders `text` with query matches wrapped in a highlight span.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    match_segments(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            let segment = segment.to_string();
            if is_match {
                view! { <mark class="search-match">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the debounced query
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state before debounce
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        );
        match scheduled {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(err) => log::warn!("setTimeout failed: {:?}", err),
        }
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_case_insensitive() {
        let segments = match_segments("Suite Deluxe", "su");
        assert_eq!(segments, vec![("Su", true), ("ite Deluxe", false)]);
    }

    #[test]
    fn test_segments_multiple_matches() {
        let segments = match_segments("banana", "an");
        assert_eq!(
            segments,
            vec![("b", false), ("an", true), ("an", true), ("a", false)]
        );
    }

    #[test]
    fn test_segments_empty_query_or_no_match() {
        assert_eq!(match_segments("Room 101", ""), vec![("Room 101", false)]);
        assert_eq!(match_segments("Room 101", "xyz"), vec![("Room 101", false)]);
    }

    #[test]
    fn test_segments_width_changing_lowercase() {
        // Same total byte length after lowercasing, shifted char boundaries
        let text = "İİ\u{212A}";
        assert_eq!(match_segments(text, "k"), vec![(text, false)]);
        assert_eq!(
            match_segments("Évian café", "CAF"),
            vec![("Évian ", false), ("caf", true), ("é", false)]
        );
    }
}
