//! `embedded-graphics` driver for the V5 Brain display.
//!
//! [`DisplayDriver`] buffers a full frame and copies it to the screen on
//! [`DisplayDriver::flush`]. [`run_status_display`] is the background task
//! that renders the status board and feeds screen taps to the center button.

use std::{cell::RefCell, convert::Infallible, rc::Rc, time::Duration};

use embedded_graphics::{
    Pixel,
    pixelcolor::{Rgb888, RgbColor},
    prelude::{DrawTarget, OriginDimensions, Size},
};
use log::{info, warn};
use vexide::{
    color::Rgb,
    display::{Display, Rect, TouchState},
    time::sleep,
};

use super::status::{CenterButton, ReleaseEdge, StatusScreen};

/// How often the render task checks for taps and changes.
pub const TOUCH_POLL_INTERVAL: Duration = Duration::from_millis(20);

const WIDTH: usize = Display::HORIZONTAL_RESOLUTION as usize;
const HEIGHT: usize = Display::VERTICAL_RESOLUTION as usize;

/// A buffered [`DrawTarget`] over the Brain display.
pub struct DisplayDriver {
    display: Display,
    frame:   Vec<Rgb<u8>>,
}

impl DisplayDriver {
    pub fn new(display: Display) -> Self {
        Self {
            display,
            frame: vec![Rgb::new(0, 0, 0); WIDTH * HEIGHT],
        }
    }

    /// Copies the buffered frame to the screen.
    pub fn flush(&mut self) {
        let region = Rect::new([0, 0], [WIDTH as i16, HEIGHT as i16]);
        if let Err(e) = self
            .display
            .draw_buffer(region, self.frame.iter().copied(), WIDTH as i32)
        {
            warn!("Display Flush Error: {}", e);
        }
    }

    /// Whether a finger is currently on the screen.
    pub fn touched(&self) -> bool { self.display.touch_status().state != TouchState::Released }
}

impl OriginDimensions for DisplayDriver {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for DisplayDriver {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x < WIDTH && y < HEIGHT {
                self.frame[y * WIDTH + x] = Rgb::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}

/// Renders `screen` whenever it changes and toggles the center button on
/// each tap. Never returns; spawn it and detach.
pub async fn run_status_display(mut driver: DisplayDriver, screen: Rc<RefCell<StatusScreen>>) {
    info!("Status display started");
    let mut button = CenterButton::default();
    let mut edge = ReleaseEdge::default();
    let mut drawn: Option<u32> = None;

    loop {
        if edge.update(driver.touched()) {
            if let Ok(mut screen) = screen.try_borrow_mut() {
                button.on_press(&mut screen);
            }
        }

        if let Ok(screen) = screen.try_borrow() {
            if drawn != Some(screen.revision()) {
                let Ok(()) = screen.draw(&mut driver);
                driver.flush();
                drawn = Some(screen.revision());
            }
        }

        sleep(TOUCH_POLL_INTERVAL).await;
    }
}
