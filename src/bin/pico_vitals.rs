//! Pico W vitals firmware
//!
//! Brings up the radio, then launches the four application tasks: network
//! connectivity, temperature sampling, heartbeat LED and temperature
//! averaging. The sample transport is created here and its two endpoints
//! are claimed exactly once, so no task can reach the other side's half.
//!
//! # Usage
//!
//! ```bash
//! # Build with credentials baked in at compile time
//! WIFI_SSID=MyNetwork WIFI_PASSWORD=secret \
//!     cargo build --release --features pico_w --target thumbv6m-none-eabi
//!
//! # Flash and view logs
//! probe-rs run --chip RP2040 target/thumbv6m-none-eabi/release/pico_vitals
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp as hal;
use {defmt_rtt as _, panic_probe as _};

use pico_vitals::core::sched;
use pico_vitals::platform::pico_w::tasks::{
    averaging_task, connectivity_task, heartbeat_task, sampling_task,
};
use pico_vitals::platform::pico_w::{
    init_radio, OnboardLed, OnboardTempSensor, PicoWLink, Radio, SampleBuffer,
};

/// Transport between the sampling and averaging tasks.
static SAMPLE_BUFFER: SampleBuffer = SampleBuffer::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = hal::init(Default::default());

    pico_vitals::log_info!("pico_vitals");
    pico_vitals::log_info!("===========");
    sched::log_task_table();

    let Radio { stack, control } = init_radio(
        spawner, p.PIN_23, p.PIN_25, p.PIO0, p.PIN_24, p.PIN_29, p.DMA_CH0,
    )
    .await;

    let sensor = OnboardTempSensor::new(p.ADC, p.ADC_TEMP_SENSOR);
    let led = OnboardLed::new(control);
    let link = PicoWLink::new(stack, control, spawner);

    let tx = SAMPLE_BUFFER.sender().unwrap();
    let rx = SAMPLE_BUFFER.receiver().unwrap();

    // Spawn order follows task priority.
    spawner.spawn(connectivity_task(link)).unwrap();
    spawner.spawn(sampling_task(sensor, tx)).unwrap();
    spawner.spawn(heartbeat_task(led)).unwrap();
    spawner.spawn(averaging_task(rx)).unwrap();
}
