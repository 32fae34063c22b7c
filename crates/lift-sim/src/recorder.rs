//! The sim's own event sink.

use lift_core::{EventSink, SimEvent};

use crate::{LogHistory, SimStats};

/// Folds every event into the history and the counters, then hands it to
/// the caller's sink.
///
/// Held as one field of `Sim` so it can be borrowed mutably alongside the
/// fleet and the registry.
pub(crate) struct Recorder {
    pub(crate) history: LogHistory,
    pub(crate) stats:   SimStats,
    pub(crate) extra:   Box<dyn EventSink>,
}

impl Recorder {
    pub(crate) fn new(log_capacity: usize, extra: Box<dyn EventSink>) -> Self {
        Self {
            history: LogHistory::new(log_capacity),
            stats:   SimStats::default(),
            extra,
        }
    }
}

impl EventSink for Recorder {
    fn emit(&mut self, event: SimEvent) {
        self.stats.record(&event);
        self.history.push(event.to_string());
        self.extra.emit(event);
    }
}
