//! Brain screen status board.
//!
//! A small LCD-style board of text lines drawn with
//! [`embedded-graphics`](https://crates.io/crates/embedded-graphics). The
//! lifecycle writes to the board; on the robot a background task renders it
//! and turns screen taps into center-button presses.

/// Text lines, the center-button toggle and the tap edge detector.
pub mod status;

/// `embedded-graphics` driver for the V5 Brain display and the render task.
#[cfg(feature = "vex")]
pub mod graphics;
