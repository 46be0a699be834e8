//! Page Statistics View
//!
//! Counters for a single tracked page, with a link back to its folder.

use leptos::*;

use crate::api::{self, PageStats};
use crate::components::folder::FolderLink;
use crate::components::future::future_view;

/// Fetches one page's statistics and renders them once resolved
#[component]
pub fn PageStatsPanel(folder_id: i64, name: String) -> impl IntoView {
    future_view(
        move || api::fetch_page(folder_id, name),
        |data| view! { <PageStatsView data=data /> },
    )
}

/// Resolved page statistics
#[component]
pub fn PageStatsView(data: PageStats) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{format!("[#{}] {}", data.id, data.page)}</h1>

            <p class="text-gray-400">
                "In folder: "
                <FolderLink folder_id=data.folder_id />
            </p>

            <ul class="list-disc list-inside space-y-1">
                <li>{format!("Views: {}", data.views)}</li>
                <li>{format!("Hits: {}", data.hits)}</li>
            </ul>
        </div>
    }
}
