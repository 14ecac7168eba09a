use leptos::prelude::*;

use crate::shared::api_utils::ApiConfig;
use crate::surveys::loader::SurveyLoader;
use crate::surveys::multiple_choice::MultipleChoice;

/// Loads the survey list and renders it as a multiple-choice question.
///
/// Pure wiring: loader + aggregator, forwarding the caller's callback.
#[component]
pub fn SurveySelector(
    /// Backend endpoint configuration
    config: ApiConfig,
    /// Called with the selected survey names on every change
    #[prop(into)]
    on_update: Callback<Vec<String>>,
) -> impl IntoView {
    // Bound outside view!: the macro cannot parse a bare closure as an
    // attribute value.
    let children = move |surveys: Vec<String>| {
        view! {
            <MultipleChoice
                question="Which surveys are your favourite?"
                values=surveys
                on_update=on_update
            />
        }
    };

    view! {
        <div class="survey-selector">
            <SurveyLoader config=config children=children />
        </div>
    }
}
