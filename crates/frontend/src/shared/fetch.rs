//! One-shot GET request hook with a three-state result.
//!
//! `use_api_get` issues exactly one request per activation and exposes the
//! outcome as a signal. There is no retry, no caching, and no abort: a
//! response that arrives after a newer activation has started is discarded.

use std::fmt;

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// Outcome of a single GET request. Exactly one variant is active; a request
/// moves from `Loading` to one terminal variant and stays there until the
/// next activation resets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResult<T> {
    Loading,
    Loaded { data: T },
    Failed { error: String },
}

impl<T> FetchResult<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResult::Loading)
    }
}

/// Hands out tickets for fetch activations; only the most recent ticket may
/// write its outcome to state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub(crate) fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Issue a GET request to `url` and track its outcome.
///
/// The returned signal starts as `Loading`. Whenever `url` changes, the hook
/// resets to `Loading` and sends a fresh request; the previous request keeps
/// running but its outcome is ignored (last activation wins).
pub fn use_api_get<T>(url: Signal<String>) -> ReadSignal<FetchResult<T>>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    let (result, set_result) = signal(FetchResult::Loading);
    let guard = StoredValue::new(RequestGuard::default());

    Effect::new(move |_| {
        let url = url.get();

        let mut ticket = 0;
        guard.update_value(|g| ticket = g.begin());
        set_result.set(FetchResult::Loading);

        spawn_local(async move {
            let outcome = request_json::<T>(&url).await;
            if is_still_current(guard, ticket) {
                _ = set_result.try_set(resolve(outcome));
            }
        });
    });

    result
}

/// Whether `ticket` is still the newest activation. A guard whose owner has
/// been disposed reports false, so a response arriving after unmount is
/// dropped rather than panicking on dead state.
fn is_still_current(guard: StoredValue<RequestGuard>, ticket: u64) -> bool {
    guard
        .try_with_value(|g| g.is_current(ticket))
        .unwrap_or(false)
}

async fn request_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| send_error(&e))?;

    if !response.ok() {
        return Err(status_error(response.status(), &response.status_text()));
    }

    response.json::<T>().await.map_err(|e| decode_error(&e))
}

fn resolve<T>(outcome: Result<T, String>) -> FetchResult<T> {
    match outcome {
        Ok(data) => FetchResult::Loaded { data },
        Err(error) => FetchResult::Failed { error },
    }
}

fn send_error(err: &dyn fmt::Display) -> String {
    format!("Request failed: {}", err)
}

fn status_error(status: u16, status_text: &str) -> String {
    format!("HTTP error: {} {}", status, status_text)
}

fn decode_error(err: &dyn fmt::Display) -> String {
    format!("Failed to parse response: {}", err)
}
