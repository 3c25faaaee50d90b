//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod indicator;
pub mod link;
pub mod sensor;

// Re-export trait interfaces
pub use indicator::Indicator;
pub use link::{LinkState, NetLink};
pub use sensor::TemperatureSensor;
