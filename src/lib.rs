//! # hdrive
//!
//! Competition program for an H-drive VEX V5 robot, built on
//! [vexide](https://vexide.dev). The robot has a four-motor tank base and a
//! fifth, sideways "H" wheel for strafing.
//!
//! - **Autonomous**: a fixed dead-reckoning routine. Drive forward a set
//!   number of tiles, confirm the distance on the front-left encoder, turn in
//!   place, then hold.
//! - **Driver control**: left stick drives and strafes, right stick turns.
//! - **Status screen**: a text board on the Brain screen with a tap toggle.
//! - **Logging**: console and SD card log through the [`log`] facade.
//!
//! Hardware is reached through the traits in [`peripherals`] and the
//! [`Ticker`](time::Ticker) delay source, so every routine runs against mocks
//! in tests. The `vex` feature implements them for the real devices and
//! builds the on-robot binary.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hdrive::{
//!     competition::Robot,
//!     peripherals::{drivetrain::{DriveLayout, HDrive}, vex::DrivePorts},
//!     time::VexTicker,
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let ports = DrivePorts {
//!         front_left:  peripherals.port_10,
//!         front_right: peripherals.port_13,
//!         back_left:   peripherals.port_17,
//!         back_right:  peripherals.port_15,
//!         h_wheel:     peripherals.port_18,
//!     };
//!     let drive = HDrive::from_ports(ports, &DriveLayout::default());
//!     let mut robot = Robot::new(drive, peripherals.primary_controller, VexTicker);
//!     robot.initialize();
//!     robot.compete().await;
//! }
//! ```

/// The robot context and competition lifecycle.
///
/// Provides [`Robot`](competition::Robot), which owns the devices and
/// implements each competition mode.
pub mod competition;

/// Brain screen status board.
pub mod display;

/// SD card logging.
pub mod fs;

/// The autonomous routine and its constants.
pub mod motion;

/// Driver control mapping.
pub mod opcontrol;

/// Hardware seams and the H-drive drivetrain.
pub mod peripherals;

/// Cooperative delays.
pub mod time;

#[cfg(test)]
mod testing;
