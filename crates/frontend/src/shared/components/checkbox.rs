use leptos::prelude::*;

/// Labeled checkbox.
///
/// The element id is derived from the label so the `<label for=…>` binding
/// stays stable across renders.
#[component]
pub fn Checkbox(
    /// Label text
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, called with the new checked state
    #[prop(into)]
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_id = element_id(&label);

    view! {
        <div class="checkbox">
            <input
                id=checkbox_id.clone()
                type="checkbox"
                class="checkbox__input"
                checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
            <label class="checkbox__label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}

fn element_id(label: &str) -> String {
    use std::hash::{DefaultHasher, Hash, Hasher};

    let slug: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    // Hash of the raw label keeps ids distinct for labels that slug
    // identically ("A B" vs "A-B").
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    format!("checkbox-{}-{:x}", slug, hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_is_slugged() {
        assert!(element_id("Customer Satisfaction").starts_with("checkbox-customer-satisfaction-"));
    }

    #[test]
    fn test_element_id_is_stable_per_label() {
        assert_eq!(element_id("Website Feedback"), element_id("Website Feedback"));
    }

    #[test]
    fn test_element_id_distinct_for_identically_slugged_labels() {
        assert_ne!(element_id("A B"), element_id("A-B"));
    }
}
