//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_vitals::platform::mock::MockTempSensor;
//! use pico_vitals::platform::traits::TemperatureSensor;
//!
//! let mut sensor = MockTempSensor::with_readings(&[21.5, 22.0]);
//! let celsius = sensor.read_celsius().await?;
//! ```

#![cfg(any(test, feature = "mock"))]

mod indicator;
mod link;
mod sensor;

pub use indicator::MockIndicator;
pub use link::MockLink;
pub use sensor::MockTempSensor;
