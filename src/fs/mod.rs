//! SD card utilities.
//!
//! Currently just the logger, which mirrors every log record to a file so
//! problems seen on the field can be read back after a match.
//!
//! # Example
//!
//! ```ignore
//! use hdrive::fs::logger;
//! use log::{LevelFilter, info};
//!
//! logger::init(LevelFilter::Debug).ok();
//! info!("Robot initialized");
//! ```

/// Console and SD card logging.
///
/// Provides a [`log`] backend that writes to both the terminal and
/// [`LOG_FILE`](logger::LOG_FILE).
pub mod logger;
