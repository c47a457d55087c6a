//! Status lines for the Brain screen.
//!
//! [`StatusScreen`] holds eight fixed-capacity text lines. It only stores
//! text; [`StatusScreen::draw`] renders it onto any `embedded-graphics`
//! target. Every change bumps a revision counter so a render loop can skip
//! frames where nothing changed.

use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::{Rgb888, RgbColor},
    prelude::{DrawTarget, Point},
    text::{Baseline, Text},
};
use heapless::String;
use snafu::{Snafu, ensure};

/// Number of status lines.
pub const LINE_COUNT: usize = 8;

/// Characters per line. Longer text is cut off.
pub const LINE_CAPACITY: usize = 40;

/// Vertical pitch of one line in pixels.
pub const LINE_HEIGHT: i32 = 24;

const MARGIN: i32 = 8;

/// Line the center button toggles.
pub const TOGGLE_LINE: usize = 2;

/// Text shown on [`TOGGLE_LINE`] while the toggle is on.
pub const PRESSED_TEXT: &str = "I was pressed!";

/// Errors from [`StatusScreen`].
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ScreenError {
    /// The line index is past the last line.
    #[snafu(display("status line {line} is out of range (0..{LINE_COUNT})"))]
    LineOutOfRange { line: usize },
}

/// An eight-line text board.
#[derive(Debug, Clone, Default)]
pub struct StatusScreen {
    lines:    [String<LINE_CAPACITY>; LINE_COUNT],
    revision: u32,
}

impl StatusScreen {
    pub fn new() -> Self { Self::default() }

    /// Replaces the text of `line`, truncating at [`LINE_CAPACITY`].
    ///
    /// # Errors
    ///
    /// [`ScreenError::LineOutOfRange`] if `line >= LINE_COUNT`.
    pub fn set_text(&mut self, line: usize, text: &str) -> Result<(), ScreenError> {
        ensure!(line < LINE_COUNT, LineOutOfRangeSnafu { line });
        self.write(line, text);
        Ok(())
    }

    /// Blanks `line`.
    ///
    /// # Errors
    ///
    /// [`ScreenError::LineOutOfRange`] if `line >= LINE_COUNT`.
    pub fn clear_line(&mut self, line: usize) -> Result<(), ScreenError> {
        ensure!(line < LINE_COUNT, LineOutOfRangeSnafu { line });
        self.write(line, "");
        Ok(())
    }

    /// Text of `line`, or `None` past the last line.
    pub fn line(&self, line: usize) -> Option<&str> { self.lines.get(line).map(|l| l.as_str()) }

    /// Counter bumped on every change.
    pub fn revision(&self) -> u32 { self.revision }

    fn write(&mut self, line: usize, text: &str) {
        let slot = &mut self.lines[line];
        slot.clear();
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clears `target` and draws every non-empty line, top to bottom.
    ///
    /// # Errors
    ///
    /// Whatever error the draw target reports.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let style = MonoTextStyle::new(&FONT_10X20, Rgb888::WHITE);
        target.clear(Rgb888::BLACK)?;
        for (i, text) in self.lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let origin = Point::new(MARGIN, i as i32 * LINE_HEIGHT);
            Text::with_baseline(text.as_str(), origin, style, Baseline::Top).draw(target)?;
        }
        Ok(())
    }
}

/// The center-button toggle.
///
/// Each press flips [`TOGGLE_LINE`] between [`PRESSED_TEXT`] and blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct CenterButton {
    pressed: bool,
}

impl CenterButton {
    /// Handles one press. Returns the new toggle state.
    pub fn on_press(&mut self, screen: &mut StatusScreen) -> bool {
        self.pressed = !self.pressed;
        if self.pressed {
            screen.write(TOGGLE_LINE, PRESSED_TEXT);
        } else {
            screen.write(TOGGLE_LINE, "");
        }
        self.pressed
    }

    pub fn is_pressed(&self) -> bool { self.pressed }
}

/// Turns a polled "is down" flag into one event per press.
///
/// Fires on release, so holding a finger on the screen counts once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleaseEdge {
    was_down: bool,
}

impl ReleaseEdge {
    /// Feeds one sample. Returns `true` when a press has just ended.
    pub fn update(&mut self, down: bool) -> bool {
        let fired = self.was_down && !down;
        self.was_down = down;
        fired
    }
}
