//! Loading and Error Placeholders
//!
//! Shown by async-bound views before and after resolution.

use leptos::*;

use crate::api::FetchError;

/// Loading placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
            <span class="ml-3 text-gray-400">"Loading..."</span>
        </div>
    }
}

/// Error placeholder shown when a fetch resolves with a failure
#[component]
pub fn LoadError(error: FetchError) -> impl IntoView {
    let detail = error.to_string();

    view! {
        <div class="bg-red-900/30 border border-red-700 rounded-lg p-4">
            <p class="font-semibold text-red-400">{error.heading()}</p>
            <p class="text-sm text-red-300 mt-1">{detail}</p>
        </div>
    }
}
