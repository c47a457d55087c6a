//! Stick-to-motor mapping for driver control.
//!
//! Each tick samples the sticks, mixes them into left and right drive power
//! and writes all five motors. Values pass through untouched: no deadband, no
//! slew limiting and no clamping here. Saturation to the motor's power range
//! happens in the motor adapter.

use log::info;

use crate::{
    peripherals::{DriveMotor, Gamepad, controller::StickSample, drivetrain::HDrive},
    time::Ticker,
};

/// Ticks between control updates.
pub const TICK: u32 = 1;

/// Power for each motor group, computed from one stick sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveOutputs {
    pub left:    i32,
    pub right:   i32,
    pub lateral: i32,
}

/// Mixes a stick sample into drive outputs.
///
/// `left = x + y` and `right = x - y`, in signed arithmetic so a turn input
/// larger than the forward input goes negative instead of wrapping.
pub fn mix(sample: StickSample) -> DriveOutputs {
    DriveOutputs {
        left:    sample.x_stick + sample.y_stick,
        right:   sample.x_stick - sample.y_stick,
        lateral: sample.h_stick,
    }
}

/// Runs one control tick without the trailing delay.
pub fn step<M, G>(drive: &mut HDrive<M>, gamepad: &G) -> DriveOutputs
where
    M: DriveMotor,
    G: Gamepad + ?Sized,
{
    let outputs = mix(StickSample::read(gamepad));
    drive.tank(outputs.left, outputs.right);
    drive.strafe(outputs.lateral);
    outputs
}

/// Runs driver control forever.
///
/// There is no exit condition. The competition runtime ends driver control by
/// dropping this future, which can only happen at the per-tick delay.
pub async fn run<M, G, T>(drive: &mut HDrive<M>, gamepad: &G, ticker: &mut T)
where
    M: DriveMotor,
    G: Gamepad + ?Sized,
    T: Ticker,
{
    info!("Driver control started");
    loop {
        step(drive, gamepad);
        ticker.delay(TICK).await;
    }
}
