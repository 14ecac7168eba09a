use leptos::prelude::*;

/// Terminal failure text for the current request.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <div class="error-message__title">"Error:"</div>
            <div class="error-message__message">{message}</div>
        </div>
    }
}
