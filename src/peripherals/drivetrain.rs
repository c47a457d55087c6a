//! The H-drive drivetrain.
//!
//! Four drive motors sit in a tank layout and a fifth, the H wheel, is
//! mounted sideways for strafing.
//!
//! ```text
//!   front_left  ┌──────┐  front_right
//!               │  ==  │  <- h_wheel
//!   back_left   └──────┘  back_right
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hdrive::peripherals::drivetrain::HDrive;
//!
//! let mut drive = HDrive::new(front_left, front_right, back_left, back_right, h_wheel);
//! drive.tare_positions();
//! drive.tank(64, 64);
//! ```

use super::DriveMotor;

/// Which drivetrain motors spin backwards for positive power.
///
/// The right side is reversed so that equal power on both sides drives the
/// robot straight. Ports are not part of the layout: the motors are built
/// from the `SmartPort`s taken out of `Peripherals`, which holds each port
/// exactly once. The competition robot uses ports 10, 13, 17, 15 and 18
/// (front-left, front-right, back-left, back-right, H wheel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveLayout {
    pub front_left:  bool,
    pub front_right: bool,
    pub back_left:   bool,
    pub back_right:  bool,
    pub h_wheel:     bool,
}

impl Default for DriveLayout {
    fn default() -> Self {
        Self {
            front_left:  false,
            front_right: true,
            back_left:   false,
            back_right:  true,
            h_wheel:     true,
        }
    }
}

/// An H-drive: a four-motor tank base plus one lateral wheel.
///
/// The four drive motors always receive the same class of command, so the
/// chassis moves as one rigid body. The H wheel is only ever driven open
/// loop and is never tared.
pub struct HDrive<M> {
    pub front_left:  M,
    pub front_right: M,
    pub back_left:   M,
    pub back_right:  M,
    pub h_wheel:     M,
}

impl<M: DriveMotor> HDrive<M> {
    /// Builds a drivetrain from already configured motors.
    pub fn new(front_left: M, front_right: M, back_left: M, back_right: M, h_wheel: M) -> Self {
        Self {
            front_left,
            front_right,
            back_left,
            back_right,
            h_wheel,
        }
    }

    /// Zeroes the encoders of the four drive motors.
    ///
    /// Call this before anything that measures travel from a known origin.
    pub fn tare_positions(&mut self) {
        self.front_left.tare_position();
        self.front_right.tare_position();
        self.back_left.tare_position();
        self.back_right.tare_position();
    }

    /// Drives each side open loop on the `[-127, 127]` power scale.
    pub fn tank(&mut self, left: i32, right: i32) {
        self.front_left.move_voltage(left);
        self.front_right.move_voltage(right);
        self.back_left.move_voltage(left);
        self.back_right.move_voltage(right);
    }

    /// Drives the H wheel open loop.
    pub fn strafe(&mut self, power: i32) { self.h_wheel.move_voltage(power); }

    /// Starts a profiled relative move on each side.
    ///
    /// Equal distances drive straight, opposite distances turn in place.
    pub fn move_relative(&mut self, left: f64, right: f64, velocity: i32) {
        self.front_left.move_relative(left, velocity);
        self.front_right.move_relative(right, velocity);
        self.back_left.move_relative(left, velocity);
        self.back_right.move_relative(right, velocity);
    }

    /// Encoder position of the front-left motor in degrees.
    ///
    /// The autonomous routine uses this single wheel as its travel reference.
    pub fn front_left_position(&self) -> f64 { self.front_left.position() }
}
