//! Mock temperature sensor implementation for testing

use heapless::Vec;

use crate::platform::{error::SensorError, traits::TemperatureSensor};

/// Mock temperature sensor
///
/// Replays a scripted sequence of readings and failures. Once the script is
/// exhausted the last entry repeats, so long-running loops see a steady
/// sensor; an empty script always fails.
#[derive(Debug)]
pub struct MockTempSensor {
    script: Vec<Result<f32, SensorError>, 16>,
    cursor: usize,
}

impl MockTempSensor {
    /// Create a mock sensor with an empty script
    pub fn new() -> Self {
        Self {
            script: Vec::new(),
            cursor: 0,
        }
    }

    /// Create a mock sensor that replays the given readings in order
    pub fn with_readings(celsius: &[f32]) -> Self {
        let mut sensor = Self::new();
        for &value in celsius {
            sensor.push_reading(value);
        }
        sensor
    }

    /// Append a successful reading to the script
    pub fn push_reading(&mut self, celsius: f32) {
        let _ = self.script.push(Ok(celsius));
    }

    /// Append a failed conversion to the script
    pub fn push_failure(&mut self) {
        let _ = self.script.push(Err(SensorError::ReadFailed));
    }

    /// Number of reads performed so far
    pub fn reads(&self) -> usize {
        self.cursor
    }
}

impl Default for MockTempSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureSensor for MockTempSensor {
    async fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let entry = match self.script.get(self.cursor) {
            Some(entry) => *entry,
            None => match self.script.last() {
                Some(last) => *last,
                None => Err(SensorError::ReadFailed),
            },
        };
        self.cursor += 1;
        entry
    }
}
