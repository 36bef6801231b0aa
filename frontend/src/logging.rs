//! `log` backend that writes to the browser console through `gloo-console`.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Calling it again is a no-op.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
