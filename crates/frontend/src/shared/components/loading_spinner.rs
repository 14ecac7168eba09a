use leptos::prelude::*;

/// Indicator shown while a request is in flight.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <div class="loading-spinner__circle"></div>
            <div class="loading-spinner__text">"Loading..."</div>
        </div>
    }
}
