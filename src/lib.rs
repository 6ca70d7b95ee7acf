//! Core crate exports for building and running the `applist` terminal
//! interface.
//!
//! The root module primarily re-exports types from the catalog and UI
//! subsystems so that embedders can configure the browser without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod search;
pub mod theme;
pub mod ui;

pub use catalog::{AppRow, CatalogSource, FetchError, HttpCatalogSource};
pub use theme::Theme;
pub use ui::{AppSelection, BrowseOutcome, BrowserUi};
