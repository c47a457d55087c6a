//! Joystick axes and per-tick stick samples.
//!
//! A [`StickSample`] is taken once per operator-control tick and thrown away
//! at the end of it. Readings are signed so stick arithmetic never wraps.

use super::Gamepad;

/// One analog stick axis on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left stick, horizontal.
    LeftX,
    /// Left stick, vertical.
    LeftY,
    /// Right stick, horizontal.
    RightX,
    /// Right stick, vertical.
    RightY,
}

/// The three axes the H-drive mapper reads each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickSample {
    /// Turn input, read from the right stick X axis.
    pub y_stick: i32,
    /// Forward input, read from the left stick Y axis.
    pub x_stick: i32,
    /// Strafe input for the H wheel, read from the left stick X axis.
    pub h_stick: i32,
}

impl StickSample {
    /// Samples the controller.
    ///
    /// The axes are read in the order turn, forward, strafe, matching the
    /// order the driver mapping was tuned with.
    pub fn read<G: Gamepad + ?Sized>(gamepad: &G) -> Self {
        Self {
            y_stick: gamepad.analog(Axis::RightX),
            x_stick: gamepad.analog(Axis::LeftY),
            h_stick: gamepad.analog(Axis::LeftX),
        }
    }
}
