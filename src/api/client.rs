//! HTTP API Client
//!
//! Functions for communicating with the denViews dashboard API.
//!
//! Every endpoint lives under `<origin>/_denViews_dash/api/<route>`. The
//! base URL can be overridden through local storage so the dashboard can
//! point at an API served from somewhere other than its own origin.

use std::collections::BTreeMap;

use gloo_net::http::Request;

use crate::api::error::FetchError;

/// Path prefix the API is mounted under, relative to the page origin
pub const API_PATH: &str = "/_denViews_dash/api";

/// Fallback base URL when no browser context is available
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/_denViews_dash/api";

/// Local storage key holding the base URL override
const API_BASE_STORAGE_KEY: &str = "denviews_api_url";

/// Get the API base URL: local storage override, else the current origin
pub fn get_api_base() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                return url.trim_end_matches('/').to_string();
            }
        }
        if let Ok(origin) = window.location().origin() {
            return format!("{}{}", origin, API_PATH);
        }
    }
    DEFAULT_API_BASE.to_string()
}

/// Set the API base URL override in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_STORAGE_KEY, url);
        }
    }
}

/// Full URL for a route with no query parameters
pub fn route_url(route: &str) -> String {
    build_url(&get_api_base(), route, None)
}

/// Build a request URL from a base, a route name, and optional query
/// parameters. The search string is appended iff parameters were supplied.
fn build_url(base: &str, route: &str, params: Option<&[(&str, String)]>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), route);

    if let Some(params) = params {
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
    }

    url
}

// ============ Record Types ============

/// Statistics snapshot for a single tracked page
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PageStats {
    pub id: i64,
    pub folder_id: i64,
    pub page: String,
    pub views: u64,
    pub hits: u64,
}

/// A folder with its child-folder and child-page summaries
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    /// Absent for the root folder
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub folders: Vec<FolderSummary>,
    pub pages: Vec<PageSummary>,
}

/// Child-folder entry inside a [`Folder`]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FolderSummary {
    pub id: i64,
    pub name: String,
}

/// Child-page entry inside a [`Folder`]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PageSummary {
    pub page: String,
    pub views: u64,
    pub hits: u64,
}

/// One settings field value, tagged by primitive type
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Toggle(bool),
    Number(f64),
    Text(String),
}

/// Settings payload: field name to primitive value, deterministically ordered
pub type Settings = BTreeMap<String, SettingValue>;

// ============ API Functions ============

/// Fetch statistics for one page by owning folder and name
pub async fn fetch_page(folder_id: i64, name: String) -> Result<PageStats, FetchError> {
    let url = build_url(
        &get_api_base(),
        "page",
        Some(&[("folder_id", folder_id.to_string()), ("name", name)]),
    );
    get_json(url).await
}

/// Fetch a folder with its child folders and pages
pub async fn fetch_folder(folder_id: i64) -> Result<Folder, FetchError> {
    let url = build_url(
        &get_api_base(),
        "folder",
        Some(&[("folder_id", folder_id.to_string())]),
    );
    get_json(url).await
}

/// Fetch the current settings mapping
pub async fn fetch_settings() -> Result<Settings, FetchError> {
    let url = build_url(&get_api_base(), "settings", None);
    get_json(url).await
}

/// GET a URL and decode the JSON body
async fn get_json<T: serde::de::DeserializeOwned>(url: String) -> Result<T, FetchError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/_denViews_dash/api";

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            build_url(BASE, "settings", None),
            "https://example.com/_denViews_dash/api/settings"
        );
    }

    #[test]
    fn test_build_url_with_params() {
        let params = [
            ("folder_id", "3".to_string()),
            ("name", "hello world".to_string()),
        ];
        assert_eq!(
            build_url(BASE, "page", Some(&params)),
            "https://example.com/_denViews_dash/api/page?folder_id=3&name=hello%20world"
        );
    }

    #[test]
    fn test_build_url_empty_params_has_no_search_string() {
        assert_eq!(build_url(BASE, "folder", Some(&[])), format!("{}/folder", BASE));
    }

    #[test]
    fn test_build_url_normalizes_trailing_slash() {
        let base = format!("{}/", BASE);
        assert_eq!(build_url(&base, "settings", None), format!("{}/settings", BASE));
    }

    #[test]
    fn test_decode_page_stats() {
        let json = r#"{"id":7,"folder_id":2,"page":"/blog","views":120,"hits":340}"#;
        let stats: PageStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.id, 7);
        assert_eq!(stats.folder_id, 2);
        assert_eq!(stats.page, "/blog");
        assert_eq!(stats.views, 120);
        assert_eq!(stats.hits, 340);
    }

    #[test]
    fn test_decode_root_folder() {
        let json = r#"{
            "id": 0,
            "name": "root",
            "parent_id": null,
            "folders": [{"id": 1, "name": "a"}],
            "pages": [{"page": "x", "views": 5, "hits": 2}]
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, 0);
        assert_eq!(folder.name, "root");
        assert_eq!(folder.parent_id, None);
        assert_eq!(
            folder.folders,
            vec![FolderSummary { id: 1, name: "a".to_string() }]
        );
        assert_eq!(
            folder.pages,
            vec![PageSummary { page: "x".to_string(), views: 5, hits: 2 }]
        );
    }

    #[test]
    fn test_decode_folder_with_parent() {
        let json = r#"{"id":4,"name":"docs","parent_id":0,"folders":[],"pages":[]}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.parent_id, Some(0));
        assert!(folder.folders.is_empty());
        assert!(folder.pages.is_empty());
    }

    #[test]
    fn test_decode_settings_tags_each_primitive() {
        let json = r#"{"enabled": true, "limit": 10, "label": "x"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings["enabled"], SettingValue::Toggle(true));
        assert_eq!(settings["limit"], SettingValue::Number(10.0));
        assert_eq!(settings["label"], SettingValue::Text("x".to_string()));
    }
}
