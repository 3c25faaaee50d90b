//! Pico W platform implementation
//!
//! Concrete implementations of the platform traits for the Raspberry Pi
//! Pico W: the RP2040 die temperature sensor, the LED on the radio chip and
//! the CYW43439 wireless link, plus the Embassy task wrappers the launcher
//! spawns.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_vitals = { version = "0.1", features = ["pico_w"] }
//! ```

mod led;
pub mod network;
mod ping;
mod sensor;
pub mod tasks;

pub use led::OnboardLed;
pub use network::{init_radio, Radio, SharedControl};
pub use sensor::{convert_raw, OnboardTempSensor};
pub use tasks::{PicoWLink, SampleBuffer, SampleReceiver, SampleSender};
