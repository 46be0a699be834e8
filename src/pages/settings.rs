//! Settings Page
//!
//! Fetches the current settings mapping and renders the generated form,
//! which POSTs back to the `settings` route. Also hosts the API base URL
//! override for dashboards served away from the tracker origin.

use leptos::*;

use crate::api;
use crate::components::future::future_view;
use crate::components::SettingsForm;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your denViews tracker"</p>
            </div>

            <ApiSettings />

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Tracker Settings"</h2>

                {future_view(
                    || api::fetch_settings(),
                    |data| view! { <SettingsForm data=data action=api::route_url("settings") /> },
                )}
            </section>
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (saved, set_saved) = create_signal(false);

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_saved.set(true);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"denViews API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| {
                                set_api_url.set(event_target_value(&ev));
                                set_saved.set(false);
                            }
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if saved.get() { "Saved" } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
