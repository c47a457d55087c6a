//! Cooperative delays.
//!
//! Every wait in the competition routines goes through a [`Ticker`]. The
//! awaits are the only points where a mode task yields, so they are also the
//! only points where the competition runtime can drop (cancel) it.

/// A source of cooperative, fixed-length delays.
///
/// One tick is one millisecond on the robot. Test tickers are free to treat a
/// tick as a single executor poll.
pub trait Ticker {
    /// Yields to the executor for `ticks` ticks.
    fn delay(&mut self, ticks: u32) -> impl Future<Output = ()>;
}

/// Ticker backed by the `vexide` executor's timer.
#[cfg(feature = "vex")]
#[derive(Debug, Default, Clone, Copy)]
pub struct VexTicker;

#[cfg(feature = "vex")]
impl Ticker for VexTicker {
    fn delay(&mut self, ticks: u32) -> impl Future<Output = ()> {
        vexide::time::sleep(std::time::Duration::from_millis(u64::from(ticks)))
    }
}
