//! Temperature sampling task
//!
//! Reads the temperature sensor once per period, frames the reading and
//! hands it to the transport without waiting. A full transport costs the
//! current reading, never the task's cadence: the sample is dropped and the
//! next cycle starts on schedule.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};

use crate::libraries::message_buffer::Sender;
use crate::libraries::Sample;
use crate::platform::error::SensorError;
use crate::platform::traits::TemperatureSensor;

/// Where the sampler is within its cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum SamplerState {
    /// Waiting for the next period
    Idle,
    /// Conversion in flight
    Sampling,
    /// Reading taken, delivery pending
    Delivering(Sample),
}

/// One observed transition of the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum SamplerEvent {
    /// A new cycle began
    CycleStarted,
    /// The sensor produced a reading
    Read(Sample),
    /// The conversion failed; the cycle is abandoned
    SensorFailed(SensorError),
    /// The framed reading reached the transport
    Delivered(Sample),
    /// The transport was full; the reading is gone
    Dropped(Sample),
}

/// Sampling state machine
///
/// Owns the sensor and advances one transition per [`step`](Self::step)
/// call. A cycle is `Idle -> Sampling -> Delivering -> Idle`, with the
/// failure path `Sampling -> Idle` when the sensor errors out.
pub struct Sampler<S: TemperatureSensor> {
    sensor: S,
    state: SamplerState,
}

impl<S: TemperatureSensor> Sampler<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            state: SamplerState::Idle,
        }
    }

    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// Advance the machine by one transition
    pub async fn step<M: RawMutex, const CAP: usize>(
        &mut self,
        tx: &Sender<'_, M, CAP>,
    ) -> SamplerEvent {
        match self.state {
            SamplerState::Idle => {
                self.state = SamplerState::Sampling;
                SamplerEvent::CycleStarted
            }
            SamplerState::Sampling => match self.sensor.read_celsius().await {
                Ok(celsius) => {
                    let sample = Sample::new(celsius);
                    self.state = SamplerState::Delivering(sample);
                    SamplerEvent::Read(sample)
                }
                Err(e) => {
                    self.state = SamplerState::Idle;
                    SamplerEvent::SensorFailed(e)
                }
            },
            SamplerState::Delivering(sample) => {
                self.state = SamplerState::Idle;
                match tx.try_send(&sample.encode()) {
                    Ok(()) => SamplerEvent::Delivered(sample),
                    Err(_) => SamplerEvent::Dropped(sample),
                }
            }
        }
    }
}

/// Sampling task run loop
///
/// Waits out the period first, so the first reading lands one period after
/// start, then drives the machine through a full cycle.
///
/// # Example (conceptual)
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn sampling_task(sensor: OnboardTempSensor, tx: Sender<'static, M, CAP>) {
///     let sampler = Sampler::new(sensor);
///     run_sampler(sampler, tx, config::sample_period()).await
/// }
/// ```
pub async fn run_sampler<S, M, const CAP: usize>(
    mut sampler: Sampler<S>,
    tx: Sender<'_, M, CAP>,
    period: Duration,
) where
    S: TemperatureSensor,
    M: RawMutex,
{
    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        loop {
            match sampler.step(&tx).await {
                SamplerEvent::CycleStarted => {}
                SamplerEvent::Read(sample) => {
                    crate::log_info!("Onboard temperature = {} C", sample.celsius());
                }
                SamplerEvent::SensorFailed(e) => {
                    crate::log_warn!("Sensor read error: {:?}", e);
                    break;
                }
                SamplerEvent::Delivered(_) => break,
                SamplerEvent::Dropped(_) => {
                    crate::log_warn!("Transport full, sample dropped");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::message_buffer::MessageBuffer;
    use crate::platform::mock::MockTempSensor;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_cycle_walks_idle_sampling_delivering() {
        let buffer = MessageBuffer::<NoopRawMutex, 32>::new();
        let tx = buffer.sender().unwrap();
        let mut sampler = Sampler::new(MockTempSensor::with_readings(&[21.0]));

        assert_eq!(sampler.state(), SamplerState::Idle);
        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::CycleStarted);
        assert_eq!(sampler.state(), SamplerState::Sampling);

        let sample = Sample::new(21.0);
        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::Read(sample));
        assert_eq!(sampler.state(), SamplerState::Delivering(sample));

        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::Delivered(sample));
        assert_eq!(sampler.state(), SamplerState::Idle);
        assert_eq!(buffer.record_count(), 1);
    }

    #[test]
    fn test_delivered_bytes_decode_to_the_reading() {
        let buffer = MessageBuffer::<NoopRawMutex, 32>::new();
        let tx = buffer.sender().unwrap();
        let mut sampler = Sampler::new(MockTempSensor::with_readings(&[36.6]));

        for _ in 0..3 {
            block_on(sampler.step(&tx));
        }

        let mut buf = [0u8; Sample::ENCODED_LEN];
        let len = block_on(buffer.receive(&mut buf)).unwrap();
        let sample = Sample::decode(&buf[..len]).unwrap();
        assert_eq!(sample.celsius(), 36.6);
    }

    #[test]
    fn test_sensor_failure_abandons_the_cycle() {
        let buffer = MessageBuffer::<NoopRawMutex, 32>::new();
        let tx = buffer.sender().unwrap();
        let mut sampler = Sampler::new(MockTempSensor::new());

        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::CycleStarted);
        assert_eq!(
            block_on(sampler.step(&tx)),
            SamplerEvent::SensorFailed(SensorError::ReadFailed)
        );
        assert_eq!(sampler.state(), SamplerState::Idle);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_transport_drops_the_sample_not_the_resident() {
        // Room for exactly one framed sample.
        let buffer = MessageBuffer::<NoopRawMutex, 5>::new();
        let tx = buffer.sender().unwrap();
        let mut sampler = Sampler::new(MockTempSensor::with_readings(&[10.0, 99.0]));

        for _ in 0..3 {
            block_on(sampler.step(&tx));
        }
        assert_eq!(buffer.record_count(), 1);

        // Second cycle finds the transport still full.
        block_on(sampler.step(&tx));
        let sample = Sample::new(99.0);
        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::Read(sample));
        assert_eq!(block_on(sampler.step(&tx)), SamplerEvent::Dropped(sample));

        // The resident record is the first reading, untouched.
        let mut buf = [0u8; Sample::ENCODED_LEN];
        let len = block_on(buffer.receive(&mut buf)).unwrap();
        assert_eq!(Sample::decode(&buf[..len]), Some(Sample::new(10.0)));
    }
}
