//! Temperature sample and its wire encoding
//!
//! A sample is one f32 reading in degrees Celsius. On the transport it
//! travels as the raw little-endian bit pattern; the length is fixed, so the
//! consumer can reject anything that is not exactly one sample.

/// One temperature measurement in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub struct Sample {
    celsius: f32,
}

impl Sample {
    /// Encoded size on the transport, in bytes.
    pub const ENCODED_LEN: usize = 4;

    pub const fn new(celsius: f32) -> Self {
        Self { celsius }
    }

    pub const fn celsius(self) -> f32 {
        self.celsius
    }

    /// Fixed-width wire encoding.
    pub fn encode(self) -> [u8; Self::ENCODED_LEN] {
        self.celsius.to_le_bytes()
    }

    /// Decode a record received from the transport. Returns `None` unless
    /// `bytes` is exactly one encoded sample.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; Self::ENCODED_LEN] = bytes.try_into().ok()?;
        Some(Self::new(f32::from_le_bytes(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_survives_the_trip() {
        let sample = Sample::new(23.75);
        let decoded = Sample::decode(&sample.encode()).unwrap();
        assert_eq!(decoded, sample);
    }

    #[test]
    fn test_decode_rejects_wrong_lengths() {
        assert_eq!(Sample::decode(&[]), None);
        assert_eq!(Sample::decode(&[1, 2, 3]), None);
        assert_eq!(Sample::decode(&[1, 2, 3, 4, 5]), None);
    }
}
