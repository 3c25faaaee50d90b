//! Network link trait
//!
//! Device-independent interface for bringing up the wireless link and
//! starting the reachability probe. The connectivity subsystem sequences
//! these steps and owns the observable link state; implementations only
//! perform the individual operations.
//!
//! ## Usage
//!
//! ```ignore
//! use pico_vitals::platform::traits::NetLink;
//!
//! async fn bring_up<L: NetLink>(link: &mut L) -> Result<(), LinkError> {
//!     link.join().await?;
//!     link.acquire_address().await?;
//!     link.start_probe();
//!     Ok(())
//! }
//! ```

use crate::platform::error::LinkError;

/// Observable state of the wireless link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum LinkState {
    /// Radio initialized, no association attempted yet
    Down,
    /// Association or address acquisition in progress
    Associating,
    /// Associated with an address; traffic can flow
    Up,
    /// Bring-up gave up; the link will not recover on its own
    Failed,
}

/// Device-independent wireless link
///
/// This trait abstracts radio hardware specifics, enabling:
/// - Testability with mock implementations
/// - Link independence for the connectivity subsystem
#[allow(async_fn_in_trait)]
pub trait NetLink {
    /// Associate with the configured access point
    ///
    /// Resolves once the association is accepted. May stay pending
    /// indefinitely; callers bound the wait.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::JoinFailed` if the access point rejects the
    /// association.
    async fn join(&mut self) -> Result<(), LinkError>;

    /// Wait for a usable network address on the joined link
    ///
    /// Resolves once address configuration completes. May stay pending
    /// indefinitely; callers bound the wait.
    async fn acquire_address(&mut self) -> Result<(), LinkError>;

    /// Start the periodic reachability probe
    ///
    /// Only meaningful after the link is up. The probe runs in the
    /// background for the rest of the session; per-probe failures are
    /// logged, not reported here.
    fn start_probe(&mut self);
}
