//! `vexide` implementations of the hardware seams.
//!
//! Hardware faults never reach the routines: every failed call is logged at
//! `warn` and otherwise ignored, and failed position reads report zero.

use log::warn;
use vexide::{
    controller::{Controller, ControllerState},
    math::Angle,
    smart::{
        SmartPort,
        motor::{Direction, Gearset, Motor},
    },
};

use super::{
    DriveMotor, Gamepad,
    controller::Axis,
    drivetrain::{DriveLayout, HDrive},
    power_to_volts,
};

impl DriveMotor for Motor {
    fn move_voltage(&mut self, power: i32) {
        if let Err(e) = self.set_voltage(power_to_volts(power)) {
            warn!("Motor Voltage Error: {}", e);
        }
    }

    fn move_relative(&mut self, distance: f64, velocity: i32) {
        let target = DriveMotor::position(self) + distance;
        if let Err(e) = self.set_position_target(Angle::from_degrees(target), velocity) {
            warn!("Motor Position Target Error: {}", e);
        }
    }

    fn position(&self) -> f64 {
        Motor::position(self)
            .unwrap_or_else(|e| {
                warn!("Error Getting Motor Encoder Position: {}", e);
                Angle::from_degrees(0.0)
            })
            .as_degrees()
    }

    fn tare_position(&mut self) {
        if let Err(e) = self.reset_position() {
            warn!("Motor Tare Error: {}", e);
        }
    }
}

impl Gamepad for Controller {
    fn analog(&self, axis: Axis) -> i32 {
        let state = self.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });
        let raw = match axis {
            Axis::LeftX => state.left_stick.x_raw(),
            Axis::LeftY => state.left_stick.y_raw(),
            Axis::RightX => state.right_stick.x_raw(),
            Axis::RightY => state.right_stick.y_raw(),
        };
        i32::from(raw)
    }
}

/// The smart ports the drivetrain is plugged into.
///
/// Filled by moving ports out of `Peripherals`, so no two motors can share a
/// port.
///
/// ```ignore
/// let ports = DrivePorts {
///     front_left:  peripherals.port_10,
///     front_right: peripherals.port_13,
///     back_left:   peripherals.port_17,
///     back_right:  peripherals.port_15,
///     h_wheel:     peripherals.port_18,
/// };
/// let drive = HDrive::from_ports(ports, &DriveLayout::default());
/// ```
pub struct DrivePorts {
    pub front_left:  SmartPort,
    pub front_right: SmartPort,
    pub back_left:   SmartPort,
    pub back_right:  SmartPort,
    pub h_wheel:     SmartPort,
}

fn motor(port: SmartPort, reversed: bool) -> Motor {
    let direction = if reversed {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    Motor::new(port, Gearset::Green, direction)
}

impl HDrive<Motor> {
    /// Builds the drivetrain on `ports`, reversing motors per `layout`.
    pub fn from_ports(ports: DrivePorts, layout: &DriveLayout) -> Self {
        Self::new(
            motor(ports.front_left, layout.front_left),
            motor(ports.front_right, layout.front_right),
            motor(ports.back_left, layout.back_left),
            motor(ports.back_right, layout.back_right),
            motor(ports.h_wheel, layout.h_wheel),
        )
    }
}
