use crate::shared::icons::icon;
use contracts::shared::filter::EmptyState;
use leptos::prelude::*;

/// Message for an empty list of `noun` (plural, lower case).
pub fn empty_state_text(state: EmptyState, noun: &str) -> String {
    match state {
        EmptyState::NoRecords => format!("No {noun} yet"),
        EmptyState::NoMatches => format!("No {noun} match your filters"),
    }
}

#[component]
pub fn EmptyStateMessage(state: EmptyState, noun: &'static str) -> impl IntoView {
    let icon_name = match state {
        EmptyState::NoRecords => "package",
        EmptyState::NoMatches => "search",
    };

    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <div class="empty-state__text">{empty_state_text(state, noun)}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_no_records_from_no_matches() {
        assert_eq!(empty_state_text(EmptyState::NoRecords, "rooms"), "No rooms yet");
        assert_eq!(
            empty_state_text(EmptyState::NoMatches, "rooms"),
            "No rooms match your filters"
        );
    }
}
