use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::catalog::worker::{FetchCommand, FetchOutcome};

/// Tracks the catalog fetch worker and the generation of the most recently
/// issued request. Completions for older generations are never applied.
pub(crate) struct LoadRuntime {
    tx: Sender<FetchCommand>,
    rx: Receiver<FetchOutcome>,
    latest_request_id: Arc<AtomicU64>,
    next_request_id: u64,
    current_request_id: Option<u64>,
    in_flight: bool,
}

impl LoadRuntime {
    pub(crate) fn new(
        tx: Sender<FetchCommand>,
        rx: Receiver<FetchOutcome>,
        latest_request_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_request_id,
            next_request_id: 0,
            current_request_id: None,
            in_flight: false,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FetchCommand::Shutdown);
    }

    pub(crate) fn issue_fetch(&mut self) {
        self.next_request_id = self.next_request_id.saturating_add(1);
        let id = self.next_request_id;
        self.current_request_id = Some(id);
        self.in_flight = true;
        self.latest_request_id.store(id, AtomicOrdering::Release);
        let _ = self.tx.send(FetchCommand::Fetch { id });
    }

    pub(crate) fn matches_latest(&self, outcome_id: u64) -> bool {
        Some(outcome_id) == self.current_request_id
    }

    pub(crate) fn record_completion(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn has_issued_fetch(&self) -> bool {
        self.current_request_id.is_some()
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<FetchOutcome, TryRecvError> {
        self.rx.try_recv()
    }
}
