//! Temperature sensor trait
//!
//! Device-independent interface for temperature sources to be consumed by the
//! sampling subsystem.
//!
//! ## Usage
//!
//! ```ignore
//! use pico_vitals::platform::traits::TemperatureSensor;
//!
//! async fn log_temperatures<S: TemperatureSensor>(mut sensor: S) {
//!     loop {
//!         if let Ok(celsius) = sensor.read_celsius().await {
//!             // Frame and forward the reading
//!         }
//!     }
//! }
//! ```

use crate::platform::error::SensorError;

/// Device-independent temperature source
///
/// This trait abstracts sensor hardware specifics, enabling:
/// - Testability with mock implementations
/// - Sensor independence for the sampling subsystem
/// - Future sensor upgrades without pipeline changes
#[allow(async_fn_in_trait)]
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns `SensorError::ReadFailed` if the conversion did not complete.
    async fn read_celsius(&mut self) -> Result<f32, SensorError>;
}
