use crate::shared::api_utils::ApiConfig;
use crate::surveys::selector::SurveySelector;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Explicit config injection: the endpoint travels down the component
    // tree as a plain value, never through ambient context.
    let config = ApiConfig::from_window();

    let on_update = Callback::new(|selected: Vec<String>| {
        log!("selected surveys: {:?}", selected);
    });

    view! {
        <div class="app">
            <SurveySelector config=config on_update=on_update />
        </div>
    }
}
