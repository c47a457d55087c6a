//! The staged autonomous routine.
//!
//! The routine walks four stages in order and never branches:
//!
//! 1. **Reset**: tare the drive encoders.
//! 2. **Advance**: profiled move forward, then poll the front-left encoder
//!    every `poll_interval` ticks until it is inside the tolerance band.
//! 3. **Turn**: opposite profiled moves on each side. Nothing confirms it.
//! 4. **Settle**: hold for `settle` ticks.
//!
//! Only the advance is closed loop, and only on the front-left wheel. With no
//! `advance_timeout` configured a stalled motor keeps the routine polling
//! until the competition runtime drops it.

use log::{debug, info, warn};

use super::{AdvanceTimeoutSnafu, AutonConfig, AutonError};
use crate::{
    peripherals::{DriveMotor, drivetrain::HDrive},
    time::Ticker,
};

/// Where the routine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reset,
    Advance,
    Turn,
    Settle,
    Done,
}

/// Runs the autonomous routine to completion.
///
/// A restarted autonomous period calls this again and starts over from
/// [`Stage::Reset`].
///
/// # Errors
///
/// Returns [`AutonError::AdvanceTimeout`] if `config.advance_timeout` is set
/// and the front-left encoder does not reach the band in time. The turn is
/// not issued in that case.
pub async fn run<M, T>(
    drive: &mut HDrive<M>,
    ticker: &mut T,
    config: &AutonConfig,
) -> Result<(), AutonError>
where
    M: DriveMotor,
    T: Ticker,
{
    let mut stage = Stage::Reset;
    loop {
        info!("Autonomous stage: {:?}", stage);
        stage = match stage {
            Stage::Reset => {
                drive.tare_positions();
                Stage::Advance
            }
            Stage::Advance => {
                let distance = config.advance_distance();
                drive.move_relative(distance, distance, config.velocity);
                wait_for_advance(drive, ticker, config).await?;
                Stage::Turn
            }
            Stage::Turn => {
                drive.move_relative(-config.turn, config.turn, config.velocity);
                Stage::Settle
            }
            Stage::Settle => {
                ticker.delay(config.settle).await;
                Stage::Done
            }
            Stage::Done => return Ok(()),
        };
    }
}

async fn wait_for_advance<M, T>(
    drive: &HDrive<M>,
    ticker: &mut T,
    config: &AutonConfig,
) -> Result<(), AutonError>
where
    M: DriveMotor,
    T: Ticker,
{
    let mut waited: u32 = 0;
    loop {
        let position = drive.front_left_position();
        if config.advance_reached(position) {
            debug!("Advance reached {:.1} after {} ticks", position, waited);
            return Ok(());
        }

        let mut step = config.poll_interval;
        if let Some(limit) = config.advance_timeout {
            if waited >= limit {
                warn!("Advance stalled at {:.1}", position);
                return AdvanceTimeoutSnafu {
                    target: config.advance_distance(),
                    position,
                    waited,
                }
                .fail();
            }
            step = step.min(limit - waited);
        }

        ticker.delay(step).await;
        waited = waited.saturating_add(step);
    }
}

#[cfg(test)]
mod tests {
    use std::{pin::pin, task::Poll};

    use super::*;
    use crate::testing::{Command, StepTicker, mock_drive, poll_step, run_to_end};

    fn advance_command() -> Command {
        Command::MoveRelative {
            distance: 2762.5,
            velocity: 20,
        }
    }

    fn has_turned(commands: &[Command]) -> bool {
        commands.iter().any(|c| {
            matches!(c, Command::MoveRelative { distance, .. } if distance.abs() == 350.0)
        })
    }

    #[test]
    fn advance_goes_to_all_four_motors() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());

        for motor in motors.drive() {
            assert_eq!(motor.commands(), vec![Command::Tare, advance_command()]);
        }
        assert!(motors.h_wheel.commands().is_empty());
        assert_eq!(ticker.delays(), vec![2]);
    }

    #[test]
    fn turn_follows_within_one_poll_interval() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());
        motors.front_left.set_position(2767.0);
        assert!(poll_step(routine.as_mut()).is_pending());

        let left = Command::MoveRelative {
            distance: -350.0,
            velocity: 20,
        };
        let right = Command::MoveRelative {
            distance: 350.0,
            velocity: 20,
        };
        assert_eq!(motors.front_left.commands().last(), Some(&left));
        assert_eq!(motors.back_left.commands().last(), Some(&left));
        assert_eq!(motors.front_right.commands().last(), Some(&right));
        assert_eq!(motors.back_right.commands().last(), Some(&right));
        // one poll interval, then the settle
        assert_eq!(ticker.delays(), vec![2, 5000]);

        assert!(matches!(poll_step(routine.as_mut()), Poll::Ready(Ok(()))));
    }

    #[test]
    fn never_turns_while_front_left_is_short() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(run_to_end(routine.as_mut(), 10_000).is_none());

        for motor in motors.all() {
            assert!(!has_turned(&motor.commands()));
        }
        assert!(ticker.delays().iter().all(|&d| d == 2));
        assert_eq!(ticker.elapsed(), 2 * 10_000);
    }

    #[test]
    fn only_front_left_gates_the_advance() {
        let (mut drive, motors) = mock_drive();
        let mut t = StepTicker::default();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());
        motors.front_right.set_position(2762.5);
        motors.back_left.set_position(2762.5);
        motors.back_right.set_position(2762.5);
        for _ in 0..20 {
            assert!(poll_step(routine.as_mut()).is_pending());
        }

        assert!(!has_turned(&motors.back_right.commands()));
    }

    #[test]
    fn band_edge_does_not_count() {
        let (mut drive, motors) = mock_drive();
        let mut t = StepTicker::default();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());
        motors.front_left.set_position(2767.5);
        assert!(poll_step(routine.as_mut()).is_pending());
        assert!(!has_turned(&motors.front_left.commands()));
    }

    #[test]
    fn turn_ignores_feedback() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig::default();
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());
        motors.front_left.set_position(2762.5);
        assert!(poll_step(routine.as_mut()).is_pending());
        // the wheel jams mid-turn; the routine does not care
        motors.front_left.set_position(-9999.0);

        assert!(matches!(poll_step(routine.as_mut()), Poll::Ready(Ok(()))));
        assert_eq!(ticker.elapsed(), 2 + 5000);
    }

    #[test]
    fn timeout_hook_stops_before_the_turn() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig {
            advance_timeout: Some(10),
            ..AutonConfig::default()
        };
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        let result = run_to_end(routine.as_mut(), 100);

        match result {
            Some(Err(AutonError::AdvanceTimeout {
                target,
                position,
                waited,
            })) => {
                assert_eq!(target, 2762.5);
                assert_eq!(position, 0.0);
                assert_eq!(waited, 10);
            }
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert_eq!(ticker.delays(), vec![2; 5]);
        assert!(!has_turned(&motors.front_left.commands()));
    }

    #[test]
    fn timeout_between_polls_is_not_overshot() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig {
            advance_timeout: Some(5),
            ..AutonConfig::default()
        };
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        let result = run_to_end(routine.as_mut(), 100);

        assert!(matches!(
            result,
            Some(Err(AutonError::AdvanceTimeout { waited: 5, .. }))
        ));
        assert_eq!(ticker.delays(), vec![2, 2, 1]);
        assert!(!has_turned(&motors.back_right.commands()));
    }

    #[test]
    fn scaled_config_runs_end_to_end() {
        let (mut drive, motors) = mock_drive();
        let ticker = StepTicker::default();
        let mut t = ticker.clone();
        let config = AutonConfig {
            tile: 10.0,
            advance_tiles: 2.0,
            turn: 4.0,
            velocity: 50,
            tolerance: 1.0,
            poll_interval: 1,
            settle: 3,
            advance_timeout: None,
        };
        let mut routine = pin!(run(&mut drive, &mut t, &config));

        assert!(poll_step(routine.as_mut()).is_pending());
        motors.front_left.set_position(19.5);
        assert!(matches!(run_to_end(routine.as_mut(), 5), Some(Ok(()))));

        assert_eq!(motors.back_left.commands(), vec![
            Command::Tare,
            Command::MoveRelative {
                distance: 20.0,
                velocity: 50,
            },
            Command::MoveRelative {
                distance: -4.0,
                velocity: 50,
            },
        ]);
        assert_eq!(ticker.delays(), vec![1, 3]);
    }
}
