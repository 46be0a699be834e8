//! First-Run Setup Page
//!
//! Same generated form as the settings page, but POSTing to the `init`
//! route to bootstrap a fresh installation.

use leptos::*;

use crate::api;
use crate::components::future::future_view;
use crate::components::SettingsForm;

/// Setup page component
#[component]
pub fn Init() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Setup"</h1>
                <p class="text-gray-400 mt-1">"First-time configuration for this denViews installation"</p>
            </div>

            {future_view(
                || api::fetch_settings(),
                |data| view! { <SettingsForm data=data action=api::route_url("init") /> },
            )}
        </div>
    }
}
