use hdrive::{
    competition::Robot,
    display::graphics::{DisplayDriver, run_status_display},
    fs::logger,
    peripherals::{
        drivetrain::{DriveLayout, HDrive},
        vex::DrivePorts,
    },
    time::VexTicker,
};
use log::{LevelFilter, warn};
use vexide::prelude::*;

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(LevelFilter::Info) {
        warn!("Logger Init Error: {}", e);
    }

    let ports = DrivePorts {
        front_left:  peripherals.port_10,
        front_right: peripherals.port_13,
        back_left:   peripherals.port_17,
        back_right:  peripherals.port_15,
        h_wheel:     peripherals.port_18,
    };
    let drive = HDrive::from_ports(ports, &DriveLayout::default());
    let mut robot = Robot::new(drive, peripherals.primary_controller, VexTicker);

    spawn(run_status_display(
        DisplayDriver::new(peripherals.display),
        robot.screen.clone(),
    ))
    .detach();

    robot.initialize();
    robot.compete().await;
}
