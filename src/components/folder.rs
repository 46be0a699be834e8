//! Folder View
//!
//! Renders one folder of the tracking hierarchy: its parent link, its
//! child folders, and the view/hit counters of the pages it contains.

use leptos::*;

use crate::api::{self, Folder, FolderSummary, PageSummary};
use crate::components::future::future_view;

/// Fetches a folder and renders it once resolved
#[component]
pub fn FolderPanel(folder_id: i64) -> impl IntoView {
    future_view(
        move || api::fetch_folder(folder_id),
        |data| view! { <FolderView data=data /> },
    )
}

/// Resolved folder contents
#[component]
pub fn FolderView(data: Folder) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{format!("[#{}] Folder {}", data.id, data.name)}</h1>

            {match data.parent_id {
                None => view! { <p class="text-gray-400">"No parent folder."</p> }.into_view(),
                Some(parent_id) => view! {
                    <p class="text-gray-400">
                        "Parent folder: "
                        <FolderLink folder_id=parent_id />
                    </p>
                }.into_view(),
            }}

            <p class="font-semibold">"Folders:"</p>
            <FolderList folders=data.folders />

            <p class="font-semibold">"Pages:"</p>
            <PageList pages=data.pages />
        </div>
    }
}

/// Child-folder list
#[component]
fn FolderList(folders: Vec<FolderSummary>) -> impl IntoView {
    if folders.is_empty() {
        return view! { <p class="text-gray-500 text-sm">"No sub-folders."</p> }.into_view();
    }

    view! {
        <ul class="list-disc list-inside space-y-1">
            {folders.into_iter().map(|folder| view! {
                <li>
                    <FolderLink folder_id=folder.id />
                    {format!(" | {}", folder.name)}
                </li>
            }).collect_view()}
        </ul>
    }
    .into_view()
}

/// Page counter rows for one folder
#[component]
fn PageList(pages: Vec<PageSummary>) -> impl IntoView {
    if pages.is_empty() {
        return view! { <p class="text-gray-500 text-sm">"No tracked pages."</p> }.into_view();
    }

    view! {
        <ul class="list-disc list-inside space-y-1">
            {pages.into_iter().map(|page| view! {
                <li>{page_row(&page)}</li>
            }).collect_view()}
        </ul>
    }
    .into_view()
}

/// Link to a folder, carried entirely in the query string
#[component]
pub fn FolderLink(folder_id: i64) -> impl IntoView {
    view! {
        <a href=folder_href(folder_id) class="text-primary-400 hover:underline">
            {folder_id}
        </a>
    }
}

/// Href for navigating to a folder
pub fn folder_href(folder_id: i64) -> String {
    format!("?folder_id={}", folder_id)
}

/// One page entry formatted as `<page> | Views: <n> | Hits: <n>`
fn page_row(page: &PageSummary) -> String {
    format!("{} | Views: {} | Hits: {}", page.page, page.views, page.hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_href() {
        assert_eq!(folder_href(1), "?folder_id=1");
        assert_eq!(folder_href(0), "?folder_id=0");
    }

    #[test]
    fn test_page_row_label() {
        let page = PageSummary { page: "x".to_string(), views: 5, hits: 2 };
        assert_eq!(page_row(&page), "x | Views: 5 | Hits: 2");
    }
}
