//! Dashboard Page
//!
//! Entry point for browsing the tracking hierarchy. Which view renders is
//! decided entirely by the URL query parameters: `page_name` selects a
//! single page's statistics, otherwise `folder_id` selects a folder
//! (defaulting to the root).

use leptos::*;
use leptos_router::*;

use crate::components::{FolderPanel, PageStatsPanel};

/// Root folder shown when no `folder_id` is present
const ROOT_FOLDER_ID: i64 = 0;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let query = use_query_map();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Page views and hits across your tracked site"</p>
            </div>

            {move || {
                let folder_id = parse_folder_id(query.with(|q| q.get("folder_id").cloned()));

                match query.with(|q| q.get("page_name").cloned()) {
                    Some(name) => view! {
                        <PageStatsPanel folder_id=folder_id name=name />
                    }.into_view(),
                    None => view! {
                        <FolderPanel folder_id=folder_id />
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Folder id from its raw query value, falling back to the root
fn parse_folder_id(raw: Option<String>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(ROOT_FOLDER_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folder_id_present() {
        assert_eq!(parse_folder_id(Some("42".to_string())), 42);
    }

    #[test]
    fn test_parse_folder_id_missing_defaults_to_root() {
        assert_eq!(parse_folder_id(None), 0);
    }

    #[test]
    fn test_parse_folder_id_garbage_defaults_to_root() {
        assert_eq!(parse_folder_id(Some("abc".to_string())), 0);
        assert_eq!(parse_folder_id(Some(String::new())), 0);
    }
}
