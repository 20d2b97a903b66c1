//! # Simple Logging Module
//!
//! A small stderr logger for the `log` crate. Standard output carries the
//! banner, so log records never go there.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // Yellow
            Level::Info => 34,  // Blue
            Level::Debug => 32, // Green
            Level::Trace => 90, // Grey
        };
        eprintln!(
            "\u{1B}[{color}m[{:>5}] {}\u{1B}[0m",
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Maps the build-time `LOG` value to a level filter.
/// Unset or unrecognized values turn logging off.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    match value {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Initializes the logger with the level given by the `LOG` environment
/// variable at compile time. Calling it again leaves the installed logger in place.
pub fn init() {
    static LOGGER: Logger = Logger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from(option_env!("LOG")));
    }
}
