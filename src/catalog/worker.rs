//! Background fetch worker.
//!
//! One thread owns the transport; the UI sends generation-tagged fetch
//! commands and drains completions between frames. Queued commands are
//! collapsed so only the newest generation actually hits the endpoint, and a
//! completion whose generation has been superseded is never emitted.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::AppRow;
use super::client::{CatalogSource, FetchError};

/// Commands accepted by the fetch worker.
pub(crate) enum FetchCommand {
    Fetch { id: u64 },
    Shutdown,
}

/// Completion of one fetch attempt.
pub(crate) struct FetchOutcome {
    pub(crate) id: u64,
    pub(crate) catalog: Result<Vec<AppRow>, FetchError>,
}

/// Spawn the worker and return its command/result endpoints together with the
/// shared latest-generation counter.
pub(crate) fn spawn<S>(source: S) -> (Sender<FetchCommand>, Receiver<FetchOutcome>, Arc<AtomicU64>)
where
    S: CatalogSource + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let latest = Arc::new(AtomicU64::new(0));
    let latest_worker = Arc::clone(&latest);
    thread::spawn(move || run(source, command_rx, outcome_tx, latest_worker));
    (command_tx, outcome_rx, latest)
}

fn run<S>(
    source: S,
    commands: Receiver<FetchCommand>,
    outcomes: Sender<FetchOutcome>,
    latest: Arc<AtomicU64>,
) where
    S: CatalogSource,
{
    while let Ok(received) = commands.recv() {
        let mut command = received;
        // Collapse any backlog down to the newest command.
        loop {
            if matches!(command, FetchCommand::Shutdown) {
                return;
            }
            match commands.try_recv() {
                Ok(next) => command = next,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        let FetchCommand::Fetch { id } = command else {
            return;
        };

        if should_abort(id, &latest) {
            continue;
        }
        let catalog = source.fetch();
        if let Err(error) = &catalog {
            tracing::warn!(%error, "catalog fetch failed");
        }
        if should_abort(id, &latest) {
            continue;
        }
        if outcomes.send(FetchOutcome { id, catalog }).is_err() {
            return;
        }
    }
}

/// Check whether this fetch has been superseded by a newer one.
pub(crate) fn should_abort(id: u64, latest: &AtomicU64) -> bool {
    latest.load(AtomicOrdering::Acquire) != id
}
