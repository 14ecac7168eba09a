use leptos::prelude::*;

use crate::shared::components::Checkbox;
use crate::shared::selection::SelectionSet;

/// Checkbox group over `values`, reporting every change to `on_update`.
///
/// Owns the selection: an ordered, duplicate-free set of checked labels.
/// `on_update` runs synchronously with each toggle and receives the full
/// current selection in insertion order. Nothing fires on mount; the first
/// call happens on the first toggle.
#[component]
pub fn MultipleChoice(
    /// Question shown above the options
    #[prop(into)]
    question: String,
    /// One checkbox per value, initially unchecked
    values: Vec<String>,
    /// Called with the current selection on every toggle
    #[prop(into)]
    on_update: Callback<Vec<String>>,
) -> impl IntoView {
    let selected = RwSignal::new(SelectionSet::new());

    let toggle = move |label: String, checked: bool| {
        selected.update(|set| {
            if checked {
                set.insert(label);
            } else {
                set.remove(&label);
            }
        });
        on_update.run(selected.with_untracked(|set| set.items().to_vec()));
    };

    view! {
        <div class="multiple-choice">
            <div class="multiple-choice__question">{question}</div>
            <div class="multiple-choice__options">
                {values
                    .into_iter()
                    .map(|value| {
                        let checked = {
                            let label = value.clone();
                            Signal::derive(move || selected.with(|set| set.contains(&label)))
                        };
                        let on_change = {
                            let label = value.clone();
                            Callback::new(move |checked: bool| toggle(label.clone(), checked))
                        };
                        view! { <Checkbox label=value checked=checked on_change=on_change /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
