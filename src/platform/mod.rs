//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the supported boards. All
//! hardware-specific code is isolated to this module; the subsystems above it
//! only see the traits.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico_w")]
pub mod pico_w;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{LinkError, SensorError};
pub use traits::{Indicator, LinkState, NetLink, TemperatureSensor};
