//! Heartbeat task
//!
//! Blinks the onboard indicator at a slow, symmetric rate as a liveness
//! sign. The indicator goes on immediately at task start and alternates
//! every half period from then on.

use embassy_time::{Duration, Ticker};

use crate::platform::traits::Indicator;

/// Heartbeat state machine
///
/// Tracks the current indicator level; [`tick`](Self::tick) alternates it.
#[derive(Debug, Default)]
pub struct Heartbeat {
    on: bool,
}

impl Heartbeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Alternate the level, returning the new one. The first tick turns
    /// the indicator on.
    pub fn tick(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}

/// Heartbeat task run loop
///
/// Drives the indicator first and waits after, so the first half period
/// starts lit.
pub async fn run_heartbeat<I: Indicator>(mut indicator: I, half_period: Duration) {
    let mut heartbeat = Heartbeat::new();
    let mut ticker = Ticker::every(half_period);

    loop {
        let on = heartbeat.tick();
        indicator.set(on).await;
        crate::log_trace!("Heartbeat {}", if on { "on" } else { "off" });
        ticker.next().await;
    }
}
