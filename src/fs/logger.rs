//! Console and SD card logger.
//!
//! Implements the [`log`] facade. Every record is printed to the terminal
//! and appended to [`LOG_FILE`] on the SD card, so a run that went wrong on
//! the field can be read back afterwards. Warnings and errors are flushed
//! straight away; everything else waits for the buffer.
//!
//! ```ignore
//! use hdrive::fs::logger;
//! use log::{LevelFilter, info};
//!
//! logger::init(LevelFilter::Info).ok();
//! info!("Robot initialized");
//! ```
//!
//! Lines look like:
//!
//! ```text
//! INFO [1m 5s 123ms] hdrive::motion::sequencer - Autonomous stage: Advance
//! ```

use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Log file on the SD card. Truncated at start-up.
pub const LOG_FILE: &str = "hdrive.log";

/// Writes log records to the console and a sink, normally [`LOG_FILE`].
///
/// Filters on its own level, so it behaves the same whether or not it is the
/// installed global logger.
pub struct Logger<W> {
    level: LevelFilter,
    /// `None` when the file could not be opened, e.g. no SD card.
    sink:  Mutex<Option<W>>,
}

impl Logger<BufWriter<File>> {
    /// Opens [`LOG_FILE`], truncating any previous run's log.
    pub fn open(level: LevelFilter) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);
        Self {
            level,
            sink: Mutex::new(file),
        }
    }
}

impl<W: Write> Logger<W> {
    /// A logger writing to `sink` instead of the SD card.
    pub fn with_sink(sink: W, level: LevelFilter) -> Self {
        Self {
            level,
            sink: Mutex::new(Some(sink)),
        }
    }

    fn with_writer(&self, f: impl FnOnce(&mut W) -> std::io::Result<()>) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Some(writer) = sink.as_mut() {
            if f(writer).is_err() {
                // Give up on the sink after the first failed write.
                *sink = None;
            }
        }
    }
}

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool { metadata.level() <= self.level }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), uptime(), record.target(), record.args());
        print!("{}", line);

        let urgent = record.level() <= Level::Warn;
        self.with_writer(|w| {
            w.write_all(line.as_bytes())?;
            if urgent { w.flush() } else { Ok(()) }
        });
    }

    fn flush(&self) { self.with_writer(|w| w.flush()); }
}

static LOGGER: OnceLock<Logger<BufWriter<File>>> = OnceLock::new();

/// Installs the logger and sets the maximum level.
///
/// # Errors
///
/// [`SetLoggerError`] if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| Logger::open(level));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one log line, newline included.
pub fn format_line(level: Level, uptime: Duration, target: &str, args: impl fmt::Display) -> String {
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, args)
}

#[cfg(feature = "vex")]
fn uptime() -> Duration { vexide::time::user_uptime() }

#[cfg(not(feature = "vex"))]
fn uptime() -> Duration { Duration::ZERO }
