use contracts::surveys::SURVEYS_PATH;
use leptos::prelude::*;

use crate::shared::api_utils::ApiConfig;
use crate::shared::components::{ErrorMessage, LoadingSpinner};
use crate::shared::fetch::{use_api_get, FetchResult};

/// Fetches the survey list and renders by outcome.
///
/// Render-prop component: `children` receives the loaded names and produces
/// the success view; loading and failure render the shared spinner and error
/// components. Which branch shows is a plain match on the fetch state.
#[component]
pub fn SurveyLoader<F, V>(
    /// Backend endpoint configuration
    config: ApiConfig,
    /// Success view for the loaded survey names
    children: F,
) -> impl IntoView
where
    F: Fn(Vec<String>) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let url = format!("{}{}", config.endpoint, SURVEYS_PATH);
    let result = use_api_get::<Vec<String>>(Signal::derive(move || url.clone()));

    view! {
        <div class="survey-loader">
            {move || match result.get() {
                FetchResult::Loading => {
                    view! { <LoadingSpinner /> }.into_any()
                }
                FetchResult::Failed { error } => {
                    view! { <ErrorMessage message=error /> }.into_any()
                }
                FetchResult::Loaded { data } => children(data).into_any(),
            }}
        </div>
    }
}
