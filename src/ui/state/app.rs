//! Core state container for the terminal application's front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles together the
//! cached catalog, the currently displayed subset, and UI-specific state such
//! as the query editor and the loading indicator.

use std::time::Duration;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::LoadRuntime;
use crate::catalog::{self, AppRow, CatalogSource};
use crate::theme::Theme;
use crate::ui::AppSelection;
use crate::ui::input::SearchInput;

impl Drop for App<'_> {
    fn drop(&mut self) {
        self.loader.shutdown();
    }
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the full catalog most recently received from the endpoint
/// (`cached`) and the display buffers derived from it. Filtering re-derives
/// the buffers from `cached` without touching it, so the cache survives every
/// query until the next successful load replaces it wholesale.
pub struct App<'a> {
    pub cached: Vec<AppRow>,
    pub search_input: SearchInput<'a>,
    pub table_state: TableState,
    pub theme: Theme,
    pub(crate) display: DisplayBuffers,
    pub(crate) input_title: Option<String>,
    pub(crate) headers: Option<Vec<String>>,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) loader: LoadRuntime,
    pub(crate) initial_results_timeout: Option<Duration>,
}

/// Indices into `cached` currently shown, with their match scores.
#[derive(Default)]
pub(crate) struct DisplayBuffers {
    pub(crate) filtered: Vec<usize>,
    pub(crate) scores: Vec<u16>,
}

impl<'a> App<'a> {
    /// Construct an [`App`] reading from the provided catalog source.
    pub fn new<S>(source: S) -> Self
    where
        S: CatalogSource + Send + 'static,
    {
        crate::logging::initialize();
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let (command_tx, outcome_rx, latest_request_id) = catalog::worker::spawn(source);
        let loader = LoadRuntime::new(command_tx, outcome_rx, latest_request_id);

        Self {
            cached: Vec::new(),
            search_input: SearchInput::new(""),
            table_state,
            theme: Theme::default(),
            display: DisplayBuffers::default(),
            input_title: None,
            headers: None,
            throbber_state: ThrobberState::default(),
            loader,
            initial_results_timeout: Some(Duration::from_millis(250)),
        }
    }

    /// Apply a new theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set the prompt title rendered before the query editor.
    pub fn set_input_title(&mut self, title: impl Into<String>) {
        self.input_title = Some(title.into());
    }

    /// Pre-fill the query editor.
    pub fn set_initial_query(&mut self, query: impl Into<String>) {
        self.search_input = SearchInput::new(query);
    }

    /// Override the results table headers.
    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = Some(headers);
    }

    /// Return the number of rows currently displayed.
    pub(crate) fn displayed_len(&self) -> usize {
        self.display.filtered.len()
    }

    /// Ensure the row selection remains valid for the displayed subset.
    pub(crate) fn ensure_selection(&mut self) {
        if self.displayed_len() == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            let len = self.displayed_len();
            if selected >= len {
                self.table_state.select(Some(len.saturating_sub(1)));
            }
        }
    }

    /// Resolve the highlighted row to its catalog record.
    pub(crate) fn current_selection(&self) -> Option<AppSelection> {
        let selected = self.table_state.selected()?;
        let index = *self.display.filtered.get(selected)?;
        let app = self.cached.get(index)?;
        Some(AppSelection {
            name: app.name.clone(),
            url: app.url.clone(),
        })
    }

    /// Records currently visible, in display order.
    #[cfg(test)]
    pub(crate) fn displayed_rows(&self) -> Vec<&AppRow> {
        self.display
            .filtered
            .iter()
            .filter_map(|&index| self.cached.get(index))
            .collect()
    }
}
