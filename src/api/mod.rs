//! API Layer
//!
//! Typed client for the denViews dashboard API.

pub mod client;
pub mod error;

pub use client::{
    fetch_folder, fetch_page, fetch_settings, get_api_base, route_url, set_api_base, Folder,
    FolderSummary, PageStats, PageSummary, SettingValue, Settings,
};
pub use error::FetchError;
