//! Temperature averaging task
//!
//! Consumes framed readings from the transport, folds each one into a
//! fixed window moving average and reports the running value. The task has
//! no period of its own; it is paced entirely by arriving records and waits
//! indefinitely when the transport is empty.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::libraries::message_buffer::{ReceiveError, Receiver};
use crate::libraries::{MovingAverage, Sample};

/// Where the averager is within its cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum AveragerState {
    /// Blocked on the transport
    WaitingForData,
    /// A reading arrived, window update pending
    Updating(Sample),
    /// Window updated, report pending
    Reporting(f32),
}

/// One observed transition of the averager.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum AveragerEvent {
    /// A whole record arrived and decoded
    Received(Sample),
    /// A record arrived but was not a valid reading; it is discarded
    BadRecord { record_len: usize },
    /// The window absorbed the reading
    Updated(f32),
    /// The running average was reported
    Reported(f32),
}

/// Averaging state machine
///
/// Advances one transition per [`step`](Self::step) call. A cycle is
/// `WaitingForData -> Updating -> Reporting -> WaitingForData`; malformed
/// records are dropped in place and leave the window untouched.
pub struct Averager<const N: usize> {
    window: MovingAverage<N>,
    state: AveragerState,
}

impl<const N: usize> Averager<N> {
    pub fn new() -> Self {
        Self {
            window: MovingAverage::new(),
            state: AveragerState::WaitingForData,
        }
    }

    pub fn state(&self) -> AveragerState {
        self.state
    }

    /// Current window average, if any reading has arrived yet
    pub fn average(&self) -> Option<f32> {
        self.window.average()
    }

    /// Readings currently in the window
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Advance the machine by one transition
    pub async fn step<M: RawMutex, const CAP: usize>(
        &mut self,
        rx: &mut Receiver<'_, M, CAP>,
    ) -> AveragerEvent {
        match self.state {
            AveragerState::WaitingForData => {
                let mut buf = [0u8; Sample::ENCODED_LEN];
                match rx.receive(&mut buf).await {
                    Ok(len) => match Sample::decode(&buf[..len]) {
                        Some(sample) => {
                            self.state = AveragerState::Updating(sample);
                            AveragerEvent::Received(sample)
                        }
                        None => AveragerEvent::BadRecord { record_len: len },
                    },
                    Err(ReceiveError::Truncated { record_len }) => {
                        AveragerEvent::BadRecord { record_len }
                    }
                    // The indefinite receive cannot time out.
                    Err(ReceiveError::Timeout) => AveragerEvent::BadRecord { record_len: 0 },
                }
            }
            AveragerState::Updating(sample) => {
                let average = self.window.push(sample.celsius());
                self.state = AveragerState::Reporting(average);
                AveragerEvent::Updated(average)
            }
            AveragerState::Reporting(average) => {
                self.state = AveragerState::WaitingForData;
                AveragerEvent::Reported(average)
            }
        }
    }
}

impl<const N: usize> Default for Averager<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Averaging task run loop
///
/// # Example (conceptual)
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn averaging_task(rx: Receiver<'static, M, CAP>) {
///     let averager = Averager::<{ config::SAMPLE_WINDOW_LEN }>::new();
///     run_averager(averager, rx).await
/// }
/// ```
pub async fn run_averager<M, const CAP: usize, const N: usize>(
    mut averager: Averager<N>,
    mut rx: Receiver<'_, M, CAP>,
) where
    M: RawMutex,
{
    loop {
        match averager.step(&mut rx).await {
            AveragerEvent::Received(sample) => {
                crate::log_debug!("Received sample {} C", sample.celsius());
            }
            AveragerEvent::BadRecord { record_len } => {
                crate::log_warn!("Discarding malformed record of {} bytes", record_len);
            }
            AveragerEvent::Updated(_) => {}
            AveragerEvent::Reported(average) => {
                crate::log_info!("Average Temperature = {} C", average);
            }
        }
    }
}
