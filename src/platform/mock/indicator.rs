//! Mock indicator implementation for testing

use heapless::Vec;

use crate::platform::traits::Indicator;

/// Mock indicator
///
/// Tracks the current level and records the history of levels driven, for
/// test verification. History capacity is bounded; levels past the first 32
/// are still applied but not recorded.
#[derive(Debug, Default)]
pub struct MockIndicator {
    level: bool,
    history: Vec<bool, 32>,
}

impl MockIndicator {
    /// Create a mock indicator, initially off
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level
    pub fn is_on(&self) -> bool {
        self.level
    }

    /// Every level driven so far, oldest first
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl Indicator for MockIndicator {
    async fn set(&mut self, on: bool) {
        self.level = on;
        let _ = self.history.push(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_mock_indicator_tracks_level() {
        let mut indicator = MockIndicator::new();
        assert!(!indicator.is_on());

        block_on(indicator.set(true));
        assert!(indicator.is_on());

        block_on(indicator.set(false));
        assert!(!indicator.is_on());
    }

    #[test]
    fn test_mock_indicator_records_history() {
        let mut indicator = MockIndicator::new();
        block_on(indicator.set(true));
        block_on(indicator.set(false));
        block_on(indicator.set(true));
        assert_eq!(indicator.history(), &[true, false, true]);
    }
}
