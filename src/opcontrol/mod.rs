//! Operator control for the driver period.
//!
//! The driver sticks map straight onto the H-drive: left stick Y drives
//! forward, right stick X turns, left stick X strafes on the H wheel.
//!
//! # Example
//!
//! ```ignore
//! use hdrive::opcontrol::mapper;
//!
//! robot.drive.tare_positions();
//! mapper::run(&mut robot.drive, &robot.controller, &mut robot.ticker).await;
//! ```

/// Stick-to-motor mapping and the driver control loop.
///
/// Provides [`mix`](mapper::mix) for the per-tick arithmetic and
/// [`run`](mapper::run) for the loop itself.
pub mod mapper;
