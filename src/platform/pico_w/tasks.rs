//! Embassy task wrappers for the application subsystems
//!
//! Monomorphizes the generic run loops with this platform's concrete types
//! so the launcher can spawn them, and implements the wireless link on top
//! of the radio handles. The launcher spawns these in priority order; the
//! executor is cooperative, so the ranking matters only when several tasks
//! are ready at once.

use cyw43::JoinOptions;
use embassy_executor::Spawner;
use embassy_net::Stack;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Duration;

use super::network::SharedControl;
use super::ping;
use super::{OnboardLed, OnboardTempSensor};
use crate::config;
use crate::libraries::message_buffer::{MessageBuffer, Receiver, Sender};
use crate::platform::error::LinkError;
use crate::platform::traits::NetLink;
use crate::subsystems::averaging::{run_averager, Averager};
use crate::subsystems::connectivity::{run_connectivity, Connectivity};
use crate::subsystems::heartbeat::run_heartbeat;
use crate::subsystems::sampling::{run_sampler, Sampler};

/// Transport between the sampling and averaging tasks.
pub type SampleBuffer = MessageBuffer<CriticalSectionRawMutex, { config::SAMPLE_BUFFER_CAPACITY }>;
/// Producing endpoint of the sample transport.
pub type SampleSender = Sender<'static, CriticalSectionRawMutex, { config::SAMPLE_BUFFER_CAPACITY }>;
/// Consuming endpoint of the sample transport.
pub type SampleReceiver =
    Receiver<'static, CriticalSectionRawMutex, { config::SAMPLE_BUFFER_CAPACITY }>;

/// Wireless link backed by the CYW43439 radio
pub struct PicoWLink {
    stack: &'static Stack<'static>,
    control: &'static SharedControl,
    spawner: Spawner,
}

impl PicoWLink {
    pub fn new(
        stack: &'static Stack<'static>,
        control: &'static SharedControl,
        spawner: Spawner,
    ) -> Self {
        Self {
            stack,
            control,
            spawner,
        }
    }
}

impl NetLink for PicoWLink {
    async fn join(&mut self) -> Result<(), LinkError> {
        let mut control = self.control.lock().await;
        let options = JoinOptions::new(config::WIFI_PASSWORD.as_bytes());
        control
            .join(config::WIFI_SSID, options)
            .await
            .map_err(|_| LinkError::JoinFailed)
    }

    async fn acquire_address(&mut self) -> Result<(), LinkError> {
        self.stack.wait_config_up().await;
        Ok(())
    }

    fn start_probe(&mut self) {
        self.spawner.spawn(ping::probe_task(self.stack)).unwrap();
    }
}

#[embassy_executor::task]
pub async fn connectivity_task(link: PicoWLink) {
    run_connectivity(
        Connectivity::new(link),
        Duration::from_millis(config::CONNECT_TIMEOUT_MS),
        Duration::from_millis(config::LINK_IDLE_PERIOD_MS),
    )
    .await
}

#[embassy_executor::task]
pub async fn sampling_task(sensor: OnboardTempSensor, tx: SampleSender) {
    run_sampler(
        Sampler::new(sensor),
        tx,
        Duration::from_millis(config::SAMPLE_PERIOD_MS),
    )
    .await
}

#[embassy_executor::task]
pub async fn heartbeat_task(led: OnboardLed) {
    run_heartbeat(led, Duration::from_millis(config::HEARTBEAT_HALF_PERIOD_MS)).await
}

#[embassy_executor::task]
pub async fn averaging_task(rx: SampleReceiver) {
    run_averager(Averager::<{ config::SAMPLE_WINDOW_LEN }>::new(), rx).await
}
