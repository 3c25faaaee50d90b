//! Bounded message transport between two tasks
//!
//! A fixed-capacity, single-producer/single-consumer channel for small
//! variable-length records, sized in bytes rather than records. The producer
//! side never blocks unless asked to (`try_send` fails fast on a full
//! buffer), the consumer side waits for a whole record, indefinitely or with
//! a deadline. Records are enqueued atomically: a send either fits completely
//! or leaves the buffer untouched, so the consumer can never observe a
//! partial record.
//!
//! Internally the buffer is a [`ring::FrameRing`] behind a blocking mutex,
//! with one waker slot per endpoint; one slot per side is enough because the
//! channel is strictly SPSC. The endpoints are claimed once each from the
//! owning instance and handed to exactly two tasks.

use core::cell::RefCell;
use core::fmt;
use core::future::poll_fn;
use core::task::{Context, Poll};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::waitqueue::WakerRegistration;
use embassy_time::{with_timeout, Duration};

mod ring;

use ring::{FrameRing, Popped};

/// Non-blocking send failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum TrySendError {
    /// Not enough free space right now; retrying after a receive may succeed.
    Full,
    /// The record can never fit in this buffer.
    Oversized,
}

/// Bounded-wait send failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum SendError {
    /// No space became available within `max_wait`.
    Timeout,
    /// The record can never fit in this buffer.
    Oversized,
}

/// Receive failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum ReceiveError {
    /// No record arrived within `max_wait`.
    Timeout,
    /// The next record was longer than the destination buffer. The record is
    /// consumed and dropped; `record_len` is its payload length.
    Truncated { record_len: usize },
}

impl fmt::Display for TrySendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full => write!(f, "buffer full"),
            TrySendError::Oversized => write!(f, "record exceeds buffer capacity"),
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Timeout => write!(f, "no space within the wait limit"),
            SendError::Oversized => write!(f, "record exceeds buffer capacity"),
        }
    }
}

impl fmt::Display for ReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiveError::Timeout => write!(f, "no record within the wait limit"),
            ReceiveError::Truncated { record_len } => {
                write!(f, "record of {} bytes exceeded the destination", record_len)
            }
        }
    }
}

struct State<const CAP: usize> {
    ring: FrameRing<CAP>,
    receiver_waker: WakerRegistration,
    sender_waker: WakerRegistration,
    sender_claimed: bool,
    receiver_claimed: bool,
}

impl<const CAP: usize> State<CAP> {
    const fn new() -> Self {
        Self {
            ring: FrameRing::new(),
            receiver_waker: WakerRegistration::new(),
            sender_waker: WakerRegistration::new(),
            sender_claimed: false,
            receiver_claimed: false,
        }
    }
}

/// Bounded SPSC record channel over `CAP` bytes of storage.
///
/// Constructed once by the launcher; the two endpoint handles are passed to
/// the producing and consuming tasks. Each stored record costs its payload
/// length plus one prefix byte.
pub struct MessageBuffer<M: RawMutex, const CAP: usize> {
    state: Mutex<M, RefCell<State<CAP>>>,
}

impl<M: RawMutex, const CAP: usize> MessageBuffer<M, CAP> {
    /// Longest record this buffer can carry.
    pub const MAX_RECORD_LEN: usize = FrameRing::<CAP>::MAX_RECORD_LEN;

    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(State::new())),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State<CAP>) -> R) -> R {
        self.state.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Claim the producing endpoint. Returns `None` after the first claim.
    pub fn sender(&self) -> Option<Sender<'_, M, CAP>> {
        let claimed = self.with_state(|s| {
            if s.sender_claimed {
                false
            } else {
                s.sender_claimed = true;
                true
            }
        });
        claimed.then_some(Sender { buffer: self })
    }

    /// Claim the consuming endpoint. Returns `None` after the first claim.
    pub fn receiver(&self) -> Option<Receiver<'_, M, CAP>> {
        let claimed = self.with_state(|s| {
            if s.receiver_claimed {
                false
            } else {
                s.receiver_claimed = true;
                true
            }
        });
        claimed.then_some(Receiver { buffer: self })
    }

    /// Enqueue `record` without waiting. On failure the buffered content is
    /// untouched and the record is not enqueued.
    pub fn try_send(&self, record: &[u8]) -> Result<(), TrySendError> {
        self.with_state(|s| {
            s.ring.push(record)?;
            s.receiver_waker.wake();
            Ok(())
        })
    }

    /// Enqueue `record`, waiting up to `max_wait` for space.
    pub async fn send(&self, record: &[u8], max_wait: Duration) -> Result<(), SendError> {
        let wait_for_space = poll_fn(|cx| self.poll_send(record, cx));
        match with_timeout(max_wait, wait_for_space).await {
            Ok(result) => result,
            Err(_) => Err(SendError::Timeout),
        }
    }

    fn poll_send(&self, record: &[u8], cx: &mut Context<'_>) -> Poll<Result<(), SendError>> {
        self.with_state(|s| match s.ring.push(record) {
            Ok(()) => {
                s.receiver_waker.wake();
                Poll::Ready(Ok(()))
            }
            Err(TrySendError::Oversized) => Poll::Ready(Err(SendError::Oversized)),
            Err(TrySendError::Full) => {
                s.sender_waker.register(cx.waker());
                Poll::Pending
            }
        })
    }

    /// Wait indefinitely for the next record and copy it into `buf`,
    /// returning its length.
    pub async fn receive(&self, buf: &mut [u8]) -> Result<usize, ReceiveError> {
        poll_fn(|cx| self.poll_receive(buf, cx)).await
    }

    /// Wait up to `max_wait` for the next record. On timeout the buffered
    /// content is untouched.
    pub async fn receive_timeout(
        &self,
        buf: &mut [u8],
        max_wait: Duration,
    ) -> Result<usize, ReceiveError> {
        match with_timeout(max_wait, self.receive(buf)).await {
            Ok(result) => result,
            Err(_) => Err(ReceiveError::Timeout),
        }
    }

    fn poll_receive(&self, buf: &mut [u8], cx: &mut Context<'_>) -> Poll<Result<usize, ReceiveError>> {
        self.with_state(|s| match s.ring.pop(buf) {
            Some(Popped::Complete(len)) => {
                s.sender_waker.wake();
                Poll::Ready(Ok(len))
            }
            Some(Popped::Truncated(record_len)) => {
                s.sender_waker.wake();
                Poll::Ready(Err(ReceiveError::Truncated { record_len }))
            }
            None => {
                s.receiver_waker.register(cx.waker());
                Poll::Pending
            }
        })
    }

    /// Whole records currently buffered.
    pub fn record_count(&self) -> usize {
        self.with_state(|s| s.ring.frames())
    }

    /// Free capacity in bytes, prefix overhead included.
    pub fn free_bytes(&self) -> usize {
        self.with_state(|s| s.ring.free())
    }

    pub fn is_empty(&self) -> bool {
        self.with_state(|s| s.ring.is_empty())
    }
}

impl<M: RawMutex, const CAP: usize> Default for MessageBuffer<M, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producing endpoint of a [`MessageBuffer`]. One per buffer.
pub struct Sender<'a, M: RawMutex, const CAP: usize> {
    buffer: &'a MessageBuffer<M, CAP>,
}

impl<'a, M: RawMutex, const CAP: usize> Sender<'a, M, CAP> {
    /// Enqueue without waiting; see [`MessageBuffer::try_send`].
    pub fn try_send(&self, record: &[u8]) -> Result<(), TrySendError> {
        self.buffer.try_send(record)
    }

    /// Enqueue with a bounded wait; see [`MessageBuffer::send`].
    pub async fn send(&self, record: &[u8], max_wait: Duration) -> Result<(), SendError> {
        self.buffer.send(record, max_wait).await
    }
}

/// Consuming endpoint of a [`MessageBuffer`]. One per buffer.
pub struct Receiver<'a, M: RawMutex, const CAP: usize> {
    buffer: &'a MessageBuffer<M, CAP>,
}

impl<'a, M: RawMutex, const CAP: usize> Receiver<'a, M, CAP> {
    /// Wait indefinitely for the next record; see [`MessageBuffer::receive`].
    pub async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, ReceiveError> {
        self.buffer.receive(buf).await
    }

    /// Wait with a deadline; see [`MessageBuffer::receive_timeout`].
    pub async fn receive_timeout(
        &mut self,
        buf: &mut [u8],
        max_wait: Duration,
    ) -> Result<usize, ReceiveError> {
        self.buffer.receive_timeout(buf, max_wait).await
    }
}
