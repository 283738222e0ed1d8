use crate::estimation::StandardIntervals;
use crate::estimation::table::IntervalSource;
use std::sync::Arc;

/// Shared, read-only state handed to every API handler.
#[derive(Debug, Clone)]
pub struct AppState {
    intervals: Arc<dyn IntervalSource>,
}

impl AppState {
    pub fn new(intervals: Arc<dyn IntervalSource>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &dyn IntervalSource {
        self.intervals.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StandardIntervals))
    }
}
