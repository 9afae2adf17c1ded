//! Source resolution for the local video library.
//!
//! Maps a content identifier to the first reachable media file by probing a
//! fixed, ordered list of candidate locators with header-only existence
//! checks. A total miss is a valid terminal state, not an error.

use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod mock;
pub mod resolver;

pub use http::HttpSourceProbe;
pub use mock::MockSourceProbe;
pub use resolver::{ResolutionTicket, ResolutionTracker, SourceCandidate, SourceResolver};

/// Trait for existence probes against the static resource namespace.
///
/// Implementations confirm a locator is servable without transferring its
/// body (real HTTP HEAD requests, mock probes for testing).
#[async_trait]
pub trait SourceProbe: Send + Sync + std::fmt::Debug {
    /// Checks whether the resource at `locator` is servable.
    ///
    /// Returns `Ok(true)` when the namespace answers with a success status,
    /// `Ok(false)` when it answers with a non-success status.
    ///
    /// # Errors
    /// - `SourceError::ProbeFailed` - Transport-level failure reaching the namespace
    /// - `SourceError::InvalidProbeTarget` - Locator could not be turned into a request URL
    async fn exists(&self, locator: &str) -> Result<bool, SourceError>;
}

/// Errors that can occur while probing for media sources.
///
/// Per-candidate probe failures are recovered locally by the resolver: the
/// failure is logged and the scan continues with the next candidate.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure while probing a single candidate.
    #[error("Probe failed for '{url}': {reason}")]
    ProbeFailed {
        /// The candidate locator that was being probed
        url: String,
        /// The reason for the failure
        reason: String,
    },

    /// Candidate locator could not be turned into a valid request URL.
    #[error("Invalid probe target: {url}")]
    InvalidProbeTarget {
        /// The malformed locator
        url: String,
    },
}
