//! Onboard temperature sensor
//!
//! The RP2040 routes a diode on the die to the fifth ADC input. The
//! conversion below is the datasheet one (section 4.9.5): 0.706 V at 27
//! degrees with a slope of -1.721 mV per degree.

use embassy_rp::adc::{Adc, Async, Channel, Config, InterruptHandler};
use embassy_rp::peripherals::{ADC, ADC_TEMP_SENSOR};
use embassy_rp::{bind_interrupts, Peri};

use crate::platform::error::SensorError;
use crate::platform::traits::TemperatureSensor;

bind_interrupts!(struct AdcIrqs {
    ADC_IRQ_FIFO => InterruptHandler;
});

/// ADC reference voltage
const ADC_VREF: f32 = 3.3;
/// ADC full scale (12 bit)
const ADC_COUNTS: f32 = 4096.0;

/// Convert a raw conversion result to degrees Celsius
pub fn convert_raw(raw: u16) -> f32 {
    let voltage = raw as f32 * ADC_VREF / ADC_COUNTS;
    27.0 - (voltage - 0.706) / 0.001721
}

/// Temperature sensor on the RP2040 die
pub struct OnboardTempSensor {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl OnboardTempSensor {
    pub fn new(adc: Peri<'static, ADC>, temp_sensor: Peri<'static, ADC_TEMP_SENSOR>) -> Self {
        let adc = Adc::new(adc, AdcIrqs, Config::default());
        let channel = Channel::new_temp_sensor(temp_sensor);
        Self { adc, channel }
    }
}

impl TemperatureSensor for OnboardTempSensor {
    async fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let raw = self
            .adc
            .read(&mut self.channel)
            .await
            .map_err(|_| SensorError::ReadFailed)?;
        Ok(convert_raw(raw))
    }
}
