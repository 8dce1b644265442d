//! `log` backend that writes to the browser console.
//!
//! Engine code logs through the `log` macros; on wasm the host gets the
//! records via `web_sys::console` once `init()` has installed this logger.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Debug builds show construction and per-tick records, release builds
/// only info and above
#[cfg(debug_assertions)]
pub const MAX_LEVEL: LevelFilter = LevelFilter::Trace;
#[cfg(not(debug_assertions))]
pub const MAX_LEVEL: LevelFilter = LevelFilter::Info;

pub struct ConsoleLogger {
    max_level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(MAX_LEVEL);

impl ConsoleLogger {
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use web_sys::console;

    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug | Level::Trace => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger. A logger that is already set wins; the
/// second call is a no-op.
pub fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.max_level);
    }
}
