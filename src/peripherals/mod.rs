//! Hardware seams for the H-drive robot.
//!
//! The competition routines never talk to `vexide` directly. They drive
//! motors through [`DriveMotor`] and read sticks through [`Gamepad`], so the
//! same code runs on the V5 Brain and against the mocks used in tests.
//!
//! With the `vex` feature enabled, both traits are implemented for the real
//! `vexide` devices in the `vex` submodule.

/// Joystick axes and the per-tick stick sample.
pub mod controller;

/// The five-motor H-drive and its motor directions.
pub mod drivetrain;

/// `vexide` implementations of the hardware seams.
#[cfg(feature = "vex")]
pub mod vex;

/// Full scale of the `[-127, 127]` power range.
pub const POWER_SCALE: i32 = 127;

/// Motor supply voltage at full power.
pub const MAX_VOLTAGE: f64 = 12.0;

/// Converts a power on the `[-127, 127]` scale to motor volts.
///
/// Power outside the scale saturates, so the mapper's `±254` worst case
/// still lands on `±12` V.
pub fn power_to_volts(power: i32) -> f64 {
    let power = power.clamp(-POWER_SCALE, POWER_SCALE);
    f64::from(power) / f64::from(POWER_SCALE) * MAX_VOLTAGE
}

/// A smart motor as the competition routines see it.
///
/// Every method is infallible from the caller's side. Implementations deal
/// with hardware faults themselves (the `vexide` adapter logs and moves on),
/// so a failed write never stops a routine.
pub trait DriveMotor {
    /// Drives the motor open loop on the signed `[-127, 127]` power scale.
    ///
    /// Values outside the scale are saturated by the implementation, not by
    /// the caller.
    fn move_voltage(&mut self, power: i32);

    /// Starts a profiled move of `distance` encoder degrees away from the
    /// current position at `velocity` rpm.
    fn move_relative(&mut self, distance: f64, velocity: i32);

    /// Current encoder position in degrees since the last tare.
    fn position(&self) -> f64;

    /// Zeroes the encoder at the current shaft position.
    fn tare_position(&mut self);
}

/// Analog input from a driver controller.
pub trait Gamepad {
    /// Reads one stick axis on the signed `[-127, 127]` scale.
    fn analog(&self, axis: controller::Axis) -> i32;
}
