//! Connectivity task
//!
//! Brings the wireless link up once at startup: associate, wait for an
//! address, then start the background reachability probe. The whole
//! bring-up shares one deadline; a link that is not up when it expires is
//! marked failed and stays failed. After a successful bring-up the task
//! parks in a short idle loop for the rest of the session.

use embassy_time::{with_timeout, Duration, Ticker};

use crate::platform::error::LinkError;
use crate::platform::traits::{LinkState, NetLink};

/// Connectivity state machine
///
/// Owns the link and the observable [`LinkState`]. The walk is
/// `Down -> Associating -> Up` on success and `Down -> Associating ->
/// Failed` on rejection or deadline expiry.
pub struct Connectivity<L: NetLink> {
    link: L,
    state: LinkState,
}

impl<L: NetLink> Connectivity<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            state: LinkState::Down,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Bring the link up within `window`
    ///
    /// On success the link is `Up` and the reachability probe is running.
    /// On failure the link is `Failed`; there is no retry path.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::JoinFailed` if the access point rejects the
    /// association and `LinkError::Timeout` if the window expires first.
    pub async fn bring_up(&mut self, window: Duration) -> Result<(), LinkError> {
        self.state = LinkState::Associating;

        let link = &mut self.link;
        let outcome = with_timeout(window, async {
            link.join().await?;
            link.acquire_address().await
        })
        .await;

        match outcome {
            Ok(Ok(())) => {
                self.state = LinkState::Up;
                self.link.start_probe();
                Ok(())
            }
            Ok(Err(e)) => {
                self.state = LinkState::Failed;
                Err(e)
            }
            Err(_) => {
                self.state = LinkState::Failed;
                Err(LinkError::Timeout)
            }
        }
    }
}

/// Connectivity task run loop
///
/// Runs the bring-up once and then idles. A failed bring-up is fatal for
/// the session; the panic hands control to the platform's panic handler.
pub async fn run_connectivity<L: NetLink>(
    mut connectivity: Connectivity<L>,
    window: Duration,
    idle_period: Duration,
) {
    crate::log_info!("Connecting to Wi-Fi...");
    match connectivity.bring_up(window).await {
        Ok(()) => crate::log_info!("Connected."),
        Err(e) => {
            crate::log_error!("failed to connect. ({:?})", e);
            panic!("network bring-up failed");
        }
    }

    let mut ticker = Ticker::every(idle_period);
    loop {
        ticker.next().await;
    }
}
