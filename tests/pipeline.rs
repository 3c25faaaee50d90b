//! End-to-end pipeline tests over the mock platform
//!
//! Wires the sampling and averaging machines to a shared transport the way
//! the launcher does on hardware, swaps the Pico W peripherals for mocks and
//! checks the values the session would report.

use embassy_futures::{block_on, poll_once};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Duration;
use pico_vitals::config;
use pico_vitals::libraries::message_buffer::{MessageBuffer, Receiver, Sender};
use pico_vitals::platform::mock::{MockIndicator, MockLink, MockTempSensor};
use pico_vitals::platform::traits::{Indicator, LinkState};
use pico_vitals::subsystems::{
    Averager, AveragerEvent, Connectivity, Heartbeat, Sampler, SamplerEvent,
};

type PipelineBuffer = MessageBuffer<NoopRawMutex, { config::SAMPLE_BUFFER_CAPACITY }>;

/// Drive the sampler through one full cycle, returning the terminal event.
fn run_sampling_cycle<const CAP: usize>(
    sampler: &mut Sampler<MockTempSensor>,
    tx: &Sender<'_, NoopRawMutex, CAP>,
) -> SamplerEvent {
    loop {
        match block_on(sampler.step(tx)) {
            SamplerEvent::CycleStarted | SamplerEvent::Read(_) => {}
            terminal => return terminal,
        }
    }
}

/// Drive the averager through one full cycle, returning the reported average.
fn run_reporting_cycle<const CAP: usize>(
    averager: &mut Averager<{ config::SAMPLE_WINDOW_LEN }>,
    rx: &mut Receiver<'_, NoopRawMutex, CAP>,
) -> f32 {
    loop {
        if let AveragerEvent::Reported(average) = block_on(averager.step(rx)) {
            return average;
        }
    }
}

#[test]
fn test_pipeline_reports_the_filling_window() {
    let buffer = PipelineBuffer::new();
    let tx = buffer.sender().unwrap();
    let mut rx = buffer.receiver().unwrap();

    let mut sampler = Sampler::new(MockTempSensor::with_readings(&[10.0, 20.0, 30.0, 40.0]));
    let mut averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();

    for expected in [10.0, 15.0, 20.0, 25.0] {
        let event = run_sampling_cycle(&mut sampler, &tx);
        assert!(matches!(event, SamplerEvent::Delivered(_)));
        assert_eq!(run_reporting_cycle(&mut averager, &mut rx), expected);
    }
    assert_eq!(averager.window_len(), config::SAMPLE_WINDOW_LEN);
    assert!(buffer.is_empty());
}

#[test]
fn test_pipeline_evicts_once_the_window_is_full() {
    let buffer = PipelineBuffer::new();
    let tx = buffer.sender().unwrap();
    let mut rx = buffer.receiver().unwrap();

    let readings = [10.0, 20.0, 30.0, 40.0, 50.0];
    let mut sampler = Sampler::new(MockTempSensor::with_readings(&readings));
    let mut averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();

    let mut last = 0.0;
    for _ in readings {
        run_sampling_cycle(&mut sampler, &tx);
        last = run_reporting_cycle(&mut averager, &mut rx);
    }

    // 50 evicted 10: (20 + 30 + 40 + 50) / 4
    assert_eq!(last, 35.0);
    assert_eq!(averager.window_len(), config::SAMPLE_WINDOW_LEN);
}

#[test]
fn test_sensor_failures_skip_a_period_without_stalling() {
    let buffer = PipelineBuffer::new();
    let tx = buffer.sender().unwrap();
    let mut rx = buffer.receiver().unwrap();

    let mut sensor = MockTempSensor::with_readings(&[20.0]);
    sensor.push_failure();
    sensor.push_reading(30.0);
    let mut sampler = Sampler::new(sensor);
    let mut averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();

    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::Delivered(_)
    ));
    assert_eq!(run_reporting_cycle(&mut averager, &mut rx), 20.0);

    // The failed period delivers nothing and the averager keeps waiting.
    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::SensorFailed(_)
    ));
    assert!(buffer.is_empty());
    assert!(poll_once(averager.step(&mut rx)).is_pending());

    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::Delivered(_)
    ));
    assert_eq!(run_reporting_cycle(&mut averager, &mut rx), 25.0);
}

#[test]
fn test_tiny_transport_drops_fresh_samples_but_keeps_order() {
    // Room for exactly one framed sample.
    let buffer = MessageBuffer::<NoopRawMutex, 5>::new();
    let tx = buffer.sender().unwrap();
    let mut rx = buffer.receiver().unwrap();

    let mut sampler = Sampler::new(MockTempSensor::with_readings(&[10.0, 99.0]));
    let mut averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();

    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::Delivered(_)
    ));
    // The second cycle finds the transport still full and loses its reading.
    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::Dropped(_)
    ));

    // The resident record is the first reading; draining it frees the slot.
    assert_eq!(run_reporting_cycle(&mut averager, &mut rx), 10.0);
    assert!(matches!(
        run_sampling_cycle(&mut sampler, &tx),
        SamplerEvent::Delivered(_)
    ));
    assert_eq!(run_reporting_cycle(&mut averager, &mut rx), 54.5);
}

#[test]
fn test_averager_outwaits_an_idle_sampler() {
    let buffer = PipelineBuffer::new();
    let tx = buffer.sender().unwrap();
    let mut rx = buffer.receiver().unwrap();

    let mut sampler = Sampler::new(MockTempSensor::with_readings(&[21.0]));
    let mut averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();

    // Nothing sampled yet; the receive parks without erroring.
    assert!(poll_once(averager.step(&mut rx)).is_pending());
    assert!(poll_once(averager.step(&mut rx)).is_pending());

    run_sampling_cycle(&mut sampler, &tx);
    assert_eq!(run_reporting_cycle(&mut averager, &mut rx), 21.0);
}

#[test]
fn test_session_preamble_connects_then_blinks() {
    let mut connectivity = Connectivity::new(MockLink::healthy());
    assert_eq!(connectivity.state(), LinkState::Down);
    assert_eq!(
        block_on(connectivity.bring_up(Duration::from_millis(20))),
        Ok(())
    );
    assert_eq!(connectivity.state(), LinkState::Up);

    let mut indicator = MockIndicator::new();
    let mut heartbeat = Heartbeat::new();
    for _ in 0..4 {
        let on = heartbeat.tick();
        block_on(indicator.set(on));
    }
    assert_eq!(indicator.history(), &[true, false, true, false]);
    assert!(!indicator.is_on());
}
