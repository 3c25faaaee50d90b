//! Core infrastructure
//!
//! Logging macros and the task scheduling metadata shared by the launcher and
//! the application tasks.

pub mod logging;
pub mod sched;
