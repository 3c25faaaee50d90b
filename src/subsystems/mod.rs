//! Application subsystems
//!
//! Each subsystem is a small state machine plus an async run loop that drives
//! it. The machines advance one transition per `step` call and expose their
//! state, so tests can walk them without an executor; the run loops add the
//! timing and the logging.

pub mod averaging;
pub mod connectivity;
pub mod heartbeat;
pub mod sampling;

pub use averaging::{Averager, AveragerEvent, AveragerState};
pub use connectivity::Connectivity;
pub use heartbeat::Heartbeat;
pub use sampling::{Sampler, SamplerEvent, SamplerState};
