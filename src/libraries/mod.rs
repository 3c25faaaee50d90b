//! Common libraries
//!
//! Reusable pieces with no task or hardware coupling.
//!
//! ## Libraries
//!
//! - `sample`: the temperature sample and its wire encoding
//! - `message_buffer`: bounded SPSC transport between two tasks
//! - `moving_average`: fixed-window incremental average

pub mod message_buffer;
pub mod moving_average;
pub mod sample;

// Re-export commonly used types
pub use message_buffer::{MessageBuffer, Receiver, Sender};
pub use moving_average::MovingAverage;
pub use sample::Sample;
