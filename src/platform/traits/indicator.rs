//! Indicator trait
//!
//! Device-independent interface for a single on/off indicator such as the
//! onboard LED. Setting the level is async because on the Pico W the LED
//! hangs off the radio chip and every level change crosses the host
//! interface.

/// Single on/off indicator
#[allow(async_fn_in_trait)]
pub trait Indicator {
    /// Drive the indicator to the given level
    async fn set(&mut self, on: bool);
}
