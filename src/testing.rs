//! Test doubles for the hardware seams.
//!
//! Mocks share their state through `Rc<RefCell<_>>`, so a test keeps a handle
//! to each motor after moving a clone into the drivetrain.

use std::{
    cell::{Cell, RefCell},
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use waker_fn::waker_fn;

use crate::{
    peripherals::{DriveMotor, Gamepad, controller::Axis, drivetrain::HDrive},
    time::Ticker,
};

/// A command received by a [`MockMotor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Move(i32),
    MoveRelative { distance: f64, velocity: i32 },
    Tare,
}

#[derive(Debug, Default)]
struct MotorState {
    position: f64,
    commands: Vec<Command>,
}

/// Records every command and reports whatever position the test sets.
///
/// Relative moves do not change the reported position; tests move the shaft
/// themselves with [`MockMotor::set_position`].
#[derive(Debug, Clone, Default)]
pub struct MockMotor(Rc<RefCell<MotorState>>);

impl MockMotor {
    pub fn set_position(&self, position: f64) { self.0.borrow_mut().position = position; }

    pub fn commands(&self) -> Vec<Command> { self.0.borrow().commands.clone() }

    pub fn clear(&self) { self.0.borrow_mut().commands.clear(); }
}

impl DriveMotor for MockMotor {
    fn move_voltage(&mut self, power: i32) {
        self.0.borrow_mut().commands.push(Command::Move(power));
    }

    fn move_relative(&mut self, distance: f64, velocity: i32) {
        self.0
            .borrow_mut()
            .commands
            .push(Command::MoveRelative { distance, velocity });
    }

    fn position(&self) -> f64 { self.0.borrow().position }

    fn tare_position(&mut self) {
        let mut state = self.0.borrow_mut();
        state.position = 0.0;
        state.commands.push(Command::Tare);
    }
}

/// Test-side handles to the motors of a [`mock_drive`].
pub struct MockMotors {
    pub front_left:  MockMotor,
    pub front_right: MockMotor,
    pub back_left:   MockMotor,
    pub back_right:  MockMotor,
    pub h_wheel:     MockMotor,
}

impl MockMotors {
    pub fn drive(&self) -> [&MockMotor; 4] {
        [
            &self.front_left,
            &self.front_right,
            &self.back_left,
            &self.back_right,
        ]
    }

    pub fn all(&self) -> [&MockMotor; 5] {
        [
            &self.front_left,
            &self.front_right,
            &self.back_left,
            &self.back_right,
            &self.h_wheel,
        ]
    }

    pub fn clear(&self) {
        for motor in self.all() {
            motor.clear();
        }
    }
}

/// Builds a drivetrain of mock motors plus handles to inspect them.
pub fn mock_drive() -> (HDrive<MockMotor>, MockMotors) {
    let motors = MockMotors {
        front_left:  MockMotor::default(),
        front_right: MockMotor::default(),
        back_left:   MockMotor::default(),
        back_right:  MockMotor::default(),
        h_wheel:     MockMotor::default(),
    };
    let drive = HDrive::new(
        motors.front_left.clone(),
        motors.front_right.clone(),
        motors.back_left.clone(),
        motors.back_right.clone(),
        motors.h_wheel.clone(),
    );
    (drive, motors)
}

/// A controller whose sticks hold whatever the test sets.
#[derive(Debug, Clone, Default)]
pub struct MockGamepad(Rc<RefCell<[i32; 4]>>);

impl MockGamepad {
    pub fn set(&self, axis: Axis, value: i32) { self.0.borrow_mut()[slot(axis)] = value; }
}

impl Gamepad for MockGamepad {
    fn analog(&self, axis: Axis) -> i32 { self.0.borrow()[slot(axis)] }
}

fn slot(axis: Axis) -> usize {
    match axis {
        Axis::LeftX => 0,
        Axis::LeftY => 1,
        Axis::RightX => 2,
        Axis::RightY => 3,
    }
}

/// A ticker where every delay costs exactly one `Pending` poll.
///
/// Tests drive a routine with [`poll_step`] and inspect the mocks between
/// steps. Each step therefore moves the routine from one delay to the next.
#[derive(Debug, Clone, Default)]
pub struct StepTicker {
    elapsed: Rc<Cell<u64>>,
    delays:  Rc<RefCell<Vec<u32>>>,
}

impl StepTicker {
    /// Total ticks requested so far.
    pub fn elapsed(&self) -> u64 { self.elapsed.get() }

    /// Every delay requested so far, in order.
    pub fn delays(&self) -> Vec<u32> { self.delays.borrow().clone() }
}

impl Ticker for StepTicker {
    fn delay(&mut self, ticks: u32) -> impl Future<Output = ()> {
        self.elapsed.set(self.elapsed.get() + u64::from(ticks));
        self.delays.borrow_mut().push(ticks);
        YieldOnce { yielded: false }
    }
}

struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Polls a future exactly once.
pub fn poll_step<F: Future + ?Sized>(future: Pin<&mut F>) -> Poll<F::Output> {
    let waker = waker_fn(|| {});
    let mut cx = Context::from_waker(&waker);
    future.poll(&mut cx)
}

/// Polls a future until it completes, giving up after `budget` polls.
pub fn run_to_end<F: Future + ?Sized>(mut future: Pin<&mut F>, budget: usize) -> Option<F::Output> {
    for _ in 0..budget {
        if let Poll::Ready(output) = poll_step(future.as_mut()) {
            return Some(output);
        }
    }
    None
}
