//! The robot context and its competition lifecycle.
//!
//! [`Robot`] owns every device the mode routines touch. The competition
//! runtime hands it to one mode at a time by `&mut`, so two modes can never
//! drive the motors at once.
//!
//! # Example
//!
//! ```ignore
//! use hdrive::competition::Robot;
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let mut robot = Robot::new(drive, peripherals.primary_controller, VexTicker);
//!     robot.initialize();
//!     robot.compete().await;
//! }
//! ```

use std::{cell::RefCell, rc::Rc};

use log::{error, info};

#[cfg(feature = "vex")]
use vexide::{controller::Controller, smart::motor::Motor};

#[cfg(feature = "vex")]
use crate::time::VexTicker;
use crate::{
    display::status::StatusScreen,
    motion::{AutonConfig, AutonError, sequencer},
    opcontrol::mapper,
    peripherals::{DriveMotor, Gamepad, drivetrain::HDrive},
    time::Ticker,
};

/// Banner written to line 1 at start-up.
pub const BANNER: &str = "H-Drive ready";

/// Everything the competition modes operate on.
pub struct Robot<M, G, T> {
    /// The five drive motors.
    pub drive:      HDrive<M>,
    /// Primary driver controller.
    pub controller: G,
    /// Delay source for every routine.
    pub ticker:     T,
    /// Constants for the autonomous routine.
    pub auton:      AutonConfig,
    /// Status board shared with the render task.
    pub screen:     Rc<RefCell<StatusScreen>>,
}

impl<M, G, T> Robot<M, G, T>
where
    M: DriveMotor,
    G: Gamepad,
    T: Ticker,
{
    /// Creates a robot with the default autonomous constants and a blank
    /// status board.
    pub fn new(drive: HDrive<M>, controller: G, ticker: T) -> Self {
        Self {
            drive,
            controller,
            ticker,
            auton: AutonConfig::default(),
            screen: Rc::new(RefCell::new(StatusScreen::new())),
        }
    }

    /// Runs once at start-up, before any competition mode.
    ///
    /// Writes [`BANNER`] to line 1. Nothing is drawn here: the change bumps the
    /// screen's revision and the render task picks it up on its next poll.
    pub fn initialize(&mut self) {
        info!("Initializing");
        match self.screen.try_borrow_mut() {
            Ok(mut screen) => {
                if let Err(e) = screen.set_text(1, BANNER) {
                    error!("Status Screen Error: {}", e);
                }
            }
            Err(e) => error!("Error Borrowing Status Screen: {}", e),
        }
    }

    /// Runs when a competition switch or field controller connects.
    pub async fn competition_initialize(&mut self) {
        info!("Competition connected");
    }

    /// Runs while the robot is disabled.
    pub async fn disabled(&mut self) {
        info!("Disabled");
    }

    /// Runs the autonomous routine once.
    ///
    /// # Errors
    ///
    /// Whatever [`sequencer::run`] returns.
    pub async fn autonomous(&mut self) -> Result<(), AutonError> {
        info!("Autonomous started");
        sequencer::run(&mut self.drive, &mut self.ticker, &self.auton).await
    }

    /// Tares the drive and runs driver control until the runtime drops it.
    pub async fn opcontrol(&mut self) {
        self.drive.tare_positions();
        mapper::run(&mut self.drive, &self.controller, &mut self.ticker).await;
    }
}

#[cfg(feature = "vex")]
impl vexide::prelude::Compete for Robot<Motor, Controller, VexTicker> {
    async fn connected(&mut self) { self.competition_initialize().await; }

    async fn disabled(&mut self) { Robot::disabled(self).await; }

    async fn autonomous(&mut self) {
        if let Err(e) = Robot::autonomous(self).await {
            error!("Autonomous Error: {}", e);
        }
    }

    async fn driver(&mut self) { self.opcontrol().await; }
}
