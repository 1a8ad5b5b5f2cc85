use contracts::domain::common::{Emphasis, Presentation};
use leptos::prelude::*;

/// Badge variant for a status emphasis.
pub fn emphasis_variant(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Positive => "success",
        Emphasis::Neutral => "primary",
        Emphasis::Negative => "error",
        Emphasis::Outline => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Label and colour of a status value.
#[component]
pub fn StatusBadge(presentation: Presentation) -> impl IntoView {
    view! {
        <Badge variant=emphasis_variant(presentation.emphasis)>
            {presentation.label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_reservation::ReservationStatus;

    #[test]
    fn test_emphasis_variants_are_distinct() {
        let variants = [
            Emphasis::Positive,
            Emphasis::Neutral,
            Emphasis::Negative,
            Emphasis::Outline,
        ]
        .map(emphasis_variant);
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cancelled_reservation_renders_as_error() {
        let presentation = ReservationStatus::Cancelled.presentation();
        assert_eq!(emphasis_variant(presentation.emphasis), "error");
    }
}
