//! Reachability probe
//!
//! Sends one ICMP echo request per period to the configured target and logs
//! the round trip time. A lost or refused probe is logged and the next one
//! goes out on schedule; the probe never gives up on its own.

use embassy_net::icmp::ping::{PingManager, PingParams};
use embassy_net::icmp::PacketMetadata;
use embassy_net::{IpAddress, Ipv4Address, Stack};
use embassy_time::{Duration, Ticker};

use crate::config;

/// Payload carried by each echo request.
const PROBE_PAYLOAD: &[u8] = b"pico_vitals";

#[embassy_executor::task]
pub(super) async fn probe_task(stack: &'static Stack<'static>) {
    let target: Ipv4Address = match config::PING_TARGET.parse() {
        Ok(addr) => addr,
        Err(_) => {
            crate::log_error!("Invalid probe target {}, probe disabled", config::PING_TARGET);
            return;
        }
    };

    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut tx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; 128];
    let mut tx_buffer = [0u8; 128];
    let mut manager = PingManager::new(
        *stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    let mut params = PingParams::new(IpAddress::Ipv4(target));
    params.set_payload(PROBE_PAYLOAD);

    crate::log_info!(
        "Probing {} every {} ms",
        config::PING_TARGET,
        config::PROBE_PERIOD_MS
    );

    let mut ticker = Ticker::every(Duration::from_millis(config::PROBE_PERIOD_MS));
    loop {
        ticker.next().await;
        match manager.ping(&params).await {
            Ok(rtt) => crate::log_info!(
                "Reply from {}: time {} ms",
                config::PING_TARGET,
                rtt.as_millis()
            ),
            Err(e) => crate::log_warn!("Probe to {} failed: {:?}", config::PING_TARGET, e),
        }
    }
}
