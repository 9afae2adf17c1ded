//! Marquee Player - Playback control over resolved media sources
//!
//! Provides the playback surface for the Marquee front-end: a controller
//! translating transport input (play/pause, seek, volume, mute) into
//! commands against an embedded player capability, and a session tying
//! source resolution to surface lifecycle with stale-result suppression.

pub mod backend;
pub mod controller;
pub mod session;
pub mod state;

// Re-export main types
pub use backend::{PlayerBackend, PlayerCommand, RecordingBackend};
pub use controller::PlaybackController;
pub use session::{PlayerSession, Surface};
pub use state::{PlaybackState, ProgressReport};
