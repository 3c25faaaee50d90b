//! Byte ring with length-prefixed frames
//!
//! Storage for the message buffer: a fixed array treated as a circular byte
//! ring. Each frame is one length byte followed by the payload, so frames are
//! delivered whole or not at all. All index arithmetic lives here.

use super::TrySendError;

/// Outcome of popping one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Popped {
    /// Frame copied out; payload length.
    Complete(usize),
    /// Frame was longer than the destination; it was consumed and discarded.
    /// Carries the payload length.
    Truncated(usize),
}

/// Circular frame storage over `CAP` bytes. `CAP` must be at least 2 (one
/// length byte plus one payload byte).
#[derive(Debug)]
pub(crate) struct FrameRing<const CAP: usize> {
    buf: [u8; CAP],
    /// Index of the next byte to pop.
    read: usize,
    /// Bytes currently stored, including length prefixes.
    used: usize,
    /// Whole frames currently stored.
    frames: usize,
}

impl<const CAP: usize> FrameRing<CAP> {
    /// Longest payload a frame can carry: bounded by the length byte and by
    /// the ring itself (one byte goes to the prefix).
    pub(crate) const MAX_RECORD_LEN: usize = if CAP - 1 < 255 { CAP - 1 } else { 255 };

    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; CAP],
            read: 0,
            used: 0,
            frames: 0,
        }
    }

    pub(crate) fn free(&self) -> usize {
        CAP - self.used
    }

    pub(crate) fn frames(&self) -> usize {
        self.frames
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Append one frame. Fails with `Oversized` when the record could never
    /// fit and `Full` when it does not fit right now; the stored content is
    /// untouched in both cases.
    pub(crate) fn push(&mut self, record: &[u8]) -> Result<(), TrySendError> {
        if record.len() > Self::MAX_RECORD_LEN {
            return Err(TrySendError::Oversized);
        }
        let needed = 1 + record.len();
        if needed > self.free() {
            return Err(TrySendError::Full);
        }

        let mut write = (self.read + self.used) % CAP;
        self.buf[write] = record.len() as u8;
        write = (write + 1) % CAP;
        for &byte in record {
            self.buf[write] = byte;
            write = (write + 1) % CAP;
        }

        self.used += needed;
        self.frames += 1;
        Ok(())
    }

    /// Remove the oldest frame, copying its payload into `dst`. Returns
    /// `None` when the ring is empty. A frame longer than `dst` is dropped
    /// rather than left in place, so a mis-sized consumer cannot wedge the
    /// ring.
    pub(crate) fn pop(&mut self, dst: &mut [u8]) -> Option<Popped> {
        if self.frames == 0 {
            return None;
        }

        let len = self.buf[self.read] as usize;
        self.read = (self.read + 1) % CAP;

        let outcome = if len <= dst.len() {
            for slot in dst[..len].iter_mut() {
                *slot = self.buf[self.read];
                self.read = (self.read + 1) % CAP;
            }
            Popped::Complete(len)
        } else {
            self.read = (self.read + len) % CAP;
            Popped::Truncated(len)
        };

        self.used -= 1 + len;
        self.frames -= 1;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut ring = FrameRing::<16>::new();
        let mut buf = [0u8; 8];
        assert!(ring.is_empty());
        assert_eq!(ring.pop(&mut buf), None);
    }

    #[test]
    fn test_frames_come_out_in_push_order() {
        let mut ring = FrameRing::<32>::new();
        ring.push(&[1, 2, 3]).unwrap();
        ring.push(&[4]).unwrap();
        ring.push(&[5, 6]).unwrap();
        assert_eq!(ring.frames(), 3);

        let mut buf = [0u8; 8];
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(3)));
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(1)));
        assert_eq!(&buf[..1], &[4]);
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(2)));
        assert_eq!(&buf[..2], &[5, 6]);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_full_push_is_rejected_and_content_survives() {
        // Capacity 5 holds exactly one 4-byte frame.
        let mut ring = FrameRing::<5>::new();
        ring.push(&[10, 20, 30, 40]).unwrap();
        assert_eq!(ring.free(), 0);

        assert_eq!(ring.push(&[99, 99, 99, 99]), Err(TrySendError::Full));

        let mut buf = [0u8; 4];
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(4)));
        assert_eq!(buf, [10, 20, 30, 40]);
    }

    #[test]
    fn test_rejects_records_that_could_never_fit() {
        let mut ring = FrameRing::<8>::new();
        // Seven payload bytes plus the prefix would need all eight bytes.
        ring.push(&[0; 7]).unwrap();
        let mut empty = FrameRing::<8>::new();
        assert_eq!(empty.push(&[0; 8]), Err(TrySendError::Oversized));
    }

    #[test]
    fn test_wraps_cleanly_around_the_end() {
        let mut ring = FrameRing::<8>::new();
        let mut buf = [0u8; 8];

        // Advance the read position, then force a frame to straddle the end.
        ring.push(&[1, 2, 3, 4]).unwrap();
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(4)));
        ring.push(&[5, 6, 7, 8, 9]).unwrap();
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(5)));
        assert_eq!(&buf[..5], &[5, 6, 7, 8, 9]);
        assert!(ring.is_empty());
        assert_eq!(ring.free(), 8);
    }

    #[test]
    fn test_interleaved_traffic_keeps_accounting_straight() {
        let mut ring = FrameRing::<16>::new();
        let mut buf = [0u8; 8];
        for round in 0u8..50 {
            ring.push(&[round, round]).unwrap();
            ring.push(&[round]).unwrap();
            assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(2)));
            assert_eq!(&buf[..2], &[round, round]);
            assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(1)));
            assert_eq!(&buf[..1], &[round]);
        }
        assert!(ring.is_empty());
        assert_eq!(ring.free(), 16);
    }

    #[test]
    fn test_oversized_frame_for_the_destination_is_discarded() {
        let mut ring = FrameRing::<16>::new();
        ring.push(&[1, 2, 3, 4]).unwrap();
        ring.push(&[9]).unwrap();

        let mut small = [0u8; 2];
        assert_eq!(ring.pop(&mut small), Some(Popped::Truncated(4)));
        // The next frame is still intact.
        assert_eq!(ring.pop(&mut small), Some(Popped::Complete(1)));
        assert_eq!(small[0], 9);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_zero_length_records_are_legal_frames() {
        let mut ring = FrameRing::<4>::new();
        ring.push(&[]).unwrap();
        ring.push(&[]).unwrap();
        assert_eq!(ring.frames(), 2);
        let mut buf = [0u8; 1];
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(0)));
        assert_eq!(ring.pop(&mut buf), Some(Popped::Complete(0)));
        assert_eq!(ring.pop(&mut buf), None);
    }
}
