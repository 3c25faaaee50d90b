//! Platform error types
//!
//! This module defines error types for platform operations. Each trait
//! reports its own error kind; the subsystems decide what is transient and
//! what is fatal.

use core::fmt;

/// Temperature-sensor-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum SensorError {
    /// Conversion did not complete
    ReadFailed,
}

/// Network-link-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum LinkError {
    /// The access point rejected the association
    JoinFailed,
    /// The link did not come up within the allowed window
    Timeout,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::ReadFailed => write!(f, "conversion did not complete"),
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::JoinFailed => write!(f, "association rejected"),
            LinkError::Timeout => write!(f, "link did not come up in time"),
        }
    }
}
