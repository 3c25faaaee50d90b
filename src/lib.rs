#![cfg_attr(not(test), no_std)]

//! pico_vitals - On-board vitals firmware for the Raspberry Pi Pico W
//!
//! Coordinates four independent periodic activities under the Embassy
//! executor: Wi-Fi bring-up with a background reachability probe, a heartbeat
//! LED, on-chip temperature sampling, and a moving average over the sampled
//! temperatures. The sampling and averaging tasks form a producer-consumer
//! pipeline over a bounded message buffer; everything else shares only the
//! CPU.

// Platform abstraction layer (traits, mocks, Pico W bindings)
pub mod platform;

// Core systems (logging, task metadata)
pub mod core;

// Reusable data structures (message buffer, moving average, sample encoding)
pub mod libraries;

// Application tasks (sampling, averaging, heartbeat, connectivity)
pub mod subsystems;

// Compile-time configuration
pub mod config;
