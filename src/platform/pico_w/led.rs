//! Onboard LED
//!
//! On the Pico W the LED is wired to the radio chip (WL_GPIO0), not to the
//! RP2040, so every level change goes through the shared radio control
//! handle.

use super::network::SharedControl;
use crate::platform::traits::Indicator;

/// LED output number on the radio chip
const LED_GPIO: u32 = 0;

/// LED on the radio chip
pub struct OnboardLed {
    control: &'static SharedControl,
}

impl OnboardLed {
    pub fn new(control: &'static SharedControl) -> Self {
        Self { control }
    }
}

impl Indicator for OnboardLed {
    async fn set(&mut self, on: bool) {
        self.control.lock().await.gpio_set(LED_GPIO, on).await;
    }
}
