use std::thread;
use std::time::{Duration, Instant};

use crate::ui::App;

impl App<'_> {
    /// Issue the startup catalog request and give a fast endpoint a short
    /// window to answer before the first frame is drawn.
    ///
    /// The startup request is the implicit empty-query filter: the cache is
    /// empty at this point, so filtering always resolves to a load.
    pub(crate) fn hydrate_initial_catalog(&mut self) {
        if !self.loader.has_issued_fetch() {
            self.filter_by_name("");
        }

        if let Some(timeout) = self.initial_results_timeout {
            let deadline = Instant::now() + timeout;
            while Instant::now() < deadline {
                self.pump_load_results();
                if !self.loader.is_in_flight() {
                    break;
                }
                thread::sleep(Duration::from_millis(10));
            }
            self.pump_load_results();
        }
    }
}
