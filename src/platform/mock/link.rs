//! Mock network link implementation for testing

use crate::platform::{error::LinkError, traits::NetLink};

/// How a scripted link operation responds.
#[derive(Debug, Clone, Copy)]
enum Response {
    /// Resolve immediately with the given result.
    Ready(Result<(), LinkError>),
    /// Stay pending forever; the caller's deadline has to fire.
    Never,
}

/// Mock network link
///
/// Scripts the outcome of association and address acquisition, and records
/// whether the reachability probe was started.
#[derive(Debug)]
pub struct MockLink {
    join: Response,
    address: Response,
    join_attempts: usize,
    probe_started: bool,
}

impl MockLink {
    /// A link where association and address acquisition both succeed
    pub fn healthy() -> Self {
        Self {
            join: Response::Ready(Ok(())),
            address: Response::Ready(Ok(())),
            join_attempts: 0,
            probe_started: false,
        }
    }

    /// A link whose access point rejects the association
    pub fn rejecting() -> Self {
        Self {
            join: Response::Ready(Err(LinkError::JoinFailed)),
            ..Self::healthy()
        }
    }

    /// A link whose access point never answers
    pub fn silent() -> Self {
        Self {
            join: Response::Never,
            ..Self::healthy()
        }
    }

    /// A link that associates but never gets an address
    pub fn without_address() -> Self {
        Self {
            address: Response::Never,
            ..Self::healthy()
        }
    }

    /// Association attempts made so far
    pub fn join_attempts(&self) -> usize {
        self.join_attempts
    }

    /// Whether the reachability probe was started
    pub fn probe_started(&self) -> bool {
        self.probe_started
    }
}

impl NetLink for MockLink {
    async fn join(&mut self) -> Result<(), LinkError> {
        self.join_attempts += 1;
        match self.join {
            Response::Ready(result) => result,
            Response::Never => core::future::pending().await,
        }
    }

    async fn acquire_address(&mut self) -> Result<(), LinkError> {
        match self.address {
            Response::Ready(result) => result,
            Response::Never => core::future::pending().await,
        }
    }

    fn start_probe(&mut self) {
        self.probe_started = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::{block_on, poll_once};

    #[test]
    fn test_mock_link_healthy_path() {
        let mut link = MockLink::healthy();
        assert_eq!(block_on(link.join()), Ok(()));
        assert_eq!(block_on(link.acquire_address()), Ok(()));
        link.start_probe();
        assert!(link.probe_started());
        assert_eq!(link.join_attempts(), 1);
    }

    #[test]
    fn test_mock_link_rejection() {
        let mut link = MockLink::rejecting();
        assert_eq!(block_on(link.join()), Err(LinkError::JoinFailed));
        assert!(!link.probe_started());
    }

    #[test]
    fn test_mock_link_silence_stays_pending() {
        let mut link = MockLink::silent();
        assert!(poll_once(link.join()).is_pending());
    }

    #[test]
    fn test_mock_link_missing_address_stays_pending() {
        let mut link = MockLink::without_address();
        assert_eq!(block_on(link.join()), Ok(()));
        assert!(poll_once(link.acquire_address()).is_pending());
    }
}
