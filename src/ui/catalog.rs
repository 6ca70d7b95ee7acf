//! Controller operations tying the catalog worker to the UI state.

use std::sync::mpsc::TryRecvError;

use crate::catalog::AppRow;
use crate::catalog::worker::FetchOutcome;
use crate::search;
use crate::ui::App;

impl App<'_> {
    /// Filter the cached catalog by name.
    ///
    /// An empty cache means the catalog has not been loaded yet; the query is
    /// answered by requesting a load instead of filtering. This covers the
    /// implicit empty query issued at startup as well as any keystrokes that
    /// arrive before the first load completes.
    pub(crate) fn filter_by_name(&mut self, query: &str) {
        if self.cached.is_empty() {
            self.request_load();
            return;
        }

        let (filtered, scores) = search::rank_names(query, &self.cached);
        self.display.filtered = filtered;
        self.display.scores = scores;
        self.ensure_selection();
    }

    /// Ask the worker for a fresh catalog snapshot.
    pub(crate) fn request_load(&mut self) {
        self.loader.issue_fetch();
    }

    /// Drain any fetch completions waiting on the receiver channel.
    pub(crate) fn pump_load_results(&mut self) {
        loop {
            match self.loader.try_recv() {
                Ok(outcome) => self.handle_load_outcome(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply a fetch completion if it corresponds to the most recent request.
    fn handle_load_outcome(&mut self, outcome: FetchOutcome) {
        if !self.loader.matches_latest(outcome.id) {
            return;
        }
        self.loader.record_completion();

        match outcome.catalog {
            Ok(apps) => self.apply_catalog(apps),
            Err(error) => {
                // Failed loads leave whatever was displayed before in place.
                tracing::debug!(%error, "discarding failed catalog load");
            }
        }
    }

    /// Replace the cache and show the full catalog.
    ///
    /// The query text is deliberately not re-applied here; the next keystroke
    /// re-derives the displayed subset from the new cache.
    fn apply_catalog(&mut self, apps: Vec<AppRow>) {
        self.cached = apps;
        let (filtered, scores) = search::rank_names("", &self.cached);
        self.display.filtered = filtered;
        self.display.scores = scores;
        self.ensure_selection();
    }
}
