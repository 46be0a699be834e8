//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod folder;
pub mod future;
pub mod loading;
pub mod nav;
pub mod page_stats;
pub mod settings_form;

pub use folder::FolderPanel;
pub use loading::{LoadError, Loading};
pub use nav::Nav;
pub use page_stats::PageStatsPanel;
pub use settings_form::SettingsForm;
