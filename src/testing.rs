//! Helpers shared by the unit tests of several modules.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use proptest::prelude::*;

prop_compose! {
    pub(crate) fn coords_in_range(xmin: f64, xmax: f64, ymin: f64, ymax: f64)
                                 (x in xmin..xmax, y in ymin..ymax) -> [f64; 2] {
       [x, y]
    }
}

/// Keeps every formatted log line, prefixed by its level.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: parking_lot::const_mutex(Vec::new()),
};

/// Installs the capturing logger. Can be called from any number of tests.
pub(crate) fn capture_logs() {
    // Only the first call installs it, the others get an error we don't care about
    drop(log::set_logger(&LOGGER));
    log::set_max_level(LevelFilter::Debug);
}

/// Returns `true` if some captured line contains `needle`.
///
/// Tests run in parallel and share the logger, so look for something only one test logs.
pub(crate) fn logged(needle: &str) -> bool {
    LOGGER.lines.lock().iter().any(|line| line.contains(needle))
}
