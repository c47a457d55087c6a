//! Autonomous motion.
//!
//! The autonomous period runs a fixed dead-reckoning program: drive forward a
//! set number of field tiles, wait until the front-left encoder confirms the
//! distance, turn in place, then hold still until the period ends.
//!
//! # Example
//!
//! ```ignore
//! use hdrive::motion::{AutonConfig, sequencer};
//!
//! let config = AutonConfig::default();
//! sequencer::run(&mut robot.drive, &mut robot.ticker, &config).await?;
//! ```

use snafu::Snafu;

/// The staged autonomous routine.
///
/// Provides [`run`](sequencer::run), which walks the drivetrain through
/// reset, advance, turn and settle.
pub mod sequencer;

/// Constants for the autonomous routine.
///
/// Distances are encoder degrees, velocities are rpm and durations are
/// ticks (milliseconds on the robot). The defaults are the values the
/// competition routine was tuned with; tests scale them down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutonConfig {
    /// Encoder travel for one field tile.
    pub tile:            f64,
    /// Tiles to cover in the advance stage.
    pub advance_tiles:   f64,
    /// Per-side encoder travel for the in-place turn. Left goes backwards.
    pub turn:            f64,
    /// Profiled velocity for both the advance and the turn.
    pub velocity:        i32,
    /// Half-width of the band the front-left encoder must enter.
    pub tolerance:       f64,
    /// Ticks between encoder checks while advancing.
    pub poll_interval:   u32,
    /// Ticks to hold after the turn is issued.
    pub settle:          u32,
    /// Give up on the advance after this many ticks of waiting.
    ///
    /// The last poll before the limit is shortened, so the routine never
    /// waits longer than this.
    ///
    /// `None` waits forever, which hangs the routine if a drive motor
    /// stalls before reaching the target.
    pub advance_timeout: Option<u32>,
}

impl Default for AutonConfig {
    fn default() -> Self {
        Self {
            tile:            850.0,
            advance_tiles:   3.25,
            turn:            350.0,
            velocity:        20,
            tolerance:       5.0,
            poll_interval:   2,
            settle:          5000,
            advance_timeout: None,
        }
    }
}

impl AutonConfig {
    /// Encoder target for the advance stage.
    pub fn advance_distance(&self) -> f64 { self.tile * self.advance_tiles }

    /// Whether `position` lies strictly inside the advance tolerance band.
    pub fn advance_reached(&self, position: f64) -> bool {
        let target = self.advance_distance();
        position < target + self.tolerance && position > target - self.tolerance
    }
}

/// Ways the autonomous routine can end early.
#[derive(Debug, Snafu)]
pub enum AutonError {
    /// The front-left encoder never entered the tolerance band in time.
    #[snafu(display(
        "advance timed out after {waited} ticks: front-left at {position:.1}, target {target:.1}"
    ))]
    AdvanceTimeout {
        /// Encoder target of the advance.
        target:   f64,
        /// Last front-left reading.
        position: f64,
        /// Ticks spent waiting.
        waited:   u32,
    },
}
