//! Pico W radio and network stack bring-up
//!
//! Initializes the CYW43439 radio over PIO SPI and stands up the Embassy
//! network stack on top of it.
//!
//! # Bring-up Flow
//!
//! ```text
//! 1. Load CYW43439 firmware and CLM blobs
//! 2. Initialize PIO for radio SPI communication
//! 3. Spawn the radio driver task
//! 4. Create the network stack (DHCP) and spawn its runner task
//! 5. Return stack and control handles
//! ```
//!
//! Joining an access point is not part of bring-up; the connectivity task
//! drives that through the returned handles. The control handle is shared
//! behind an async mutex because two tasks use it for the rest of the
//! session: the connectivity task to join, the heartbeat task to drive the
//! LED on the radio chip.

use cyw43::Control;
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_rp::{
    bind_interrupts,
    gpio::{Level, Output},
    peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0},
    pio::{InterruptHandler as PioInterruptHandler, Pio},
    Peri,
};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;

/// Radio control handle, shared between the connectivity and heartbeat tasks.
pub type SharedControl = Mutex<CriticalSectionRawMutex, Control<'static>>;

/// Handles produced by radio bring-up.
pub struct Radio {
    /// Network stack; a handle per user, they all talk to the same stack
    pub stack: &'static Stack<'static>,
    /// Radio control for joining and for the radio-side GPIOs
    pub control: &'static SharedControl,
}

bind_interrupts!(struct PioIrqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Initialize the radio and the network stack
///
/// Takes only the peripherals the radio needs, so the launcher keeps the
/// rest. Pin assignments are fixed by the board: 23 power, 25 chip select,
/// 24 data, 29 clock.
pub async fn init_radio(
    spawner: Spawner,
    pwr: Peri<'static, PIN_23>,
    cs: Peri<'static, PIN_25>,
    pio: Peri<'static, PIO0>,
    dio: Peri<'static, PIN_24>,
    clk: Peri<'static, PIN_29>,
    dma: Peri<'static, DMA_CH0>,
) -> Radio {
    // 1. Load CYW43439 firmware
    let fw = cyw43_firmware::CYW43_43439A0;
    let clm = cyw43_firmware::CYW43_43439A0_CLM;

    // 2. Initialize PIO for radio SPI communication
    let pwr = Output::new(pwr, Level::Low);
    let cs = Output::new(cs, Level::High);
    let mut pio = Pio::new(pio, PioIrqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        dio,
        clk,
        dma,
    );

    // 3. Initialize the radio driver and spawn its task
    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.spawn(wifi_task(runner)).unwrap();

    // 4. Create the network stack and spawn its runner
    let net_config = NetConfig::dhcpv4(Default::default());
    let seed = 0x0123_4567_89ab_cdef; // RP2040 has no hardware RNG

    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    static RESOURCES: StaticCell<StackResources<8>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        net_config,
        RESOURCES.init(StackResources::<8>::new()),
        seed,
    );
    let stack = STACK.init(stack);
    spawner.spawn(net_task(runner)).unwrap();

    // 5. Load the country locale matrix and settle power management
    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    static CONTROL: StaticCell<SharedControl> = StaticCell::new();
    let control = CONTROL.init(Mutex::new(control));

    crate::log_info!("Radio initialized, network stack running");

    Radio { stack, control }
}

/// Radio driver task
///
/// Runs the CYW43439 driver event loop. Must be spawned on the executor
/// for the radio to function.
#[embassy_executor::task]
async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Network stack task
///
/// Runs the embassy-net event loop. Must be spawned on the executor for
/// network operations to function.
#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
