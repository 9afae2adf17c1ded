//! The embedded player capability boundary.
//!
//! This module defines the trait that separates transport control from any
//! concrete player implementation. The controller commands the capability
//! and stays agnostic to how frames actually reach the screen, so any
//! player can be substituted without touching controller logic.

use async_trait::async_trait;
use parking_lot::Mutex;

/// Embedded player capability: a playback surface accepting transport commands.
///
/// Commands are trusted to be handled gracefully by the implementation
/// (seeking past the end, redundant play commands, and so on), so none of
/// them surface a failure to the caller. Progress flows in the opposite
/// direction: whoever drives the backend delivers periodic
/// [`ProgressReport`](crate::state::ProgressReport)s to the controller at
/// the configured interval.
#[async_trait]
pub trait PlayerBackend: Send + Sync + std::fmt::Debug {
    /// Binds the surface to a resource locator.
    async fn load(&self, url: &str);

    /// Starts or stops playback.
    async fn set_playing(&self, playing: bool);

    /// Sets the output volume level, in [0.0, 1.0].
    async fn set_volume(&self, volume: f32);

    /// Mutes or unmutes output.
    async fn set_muted(&self, muted: bool);

    /// Jumps to a position expressed as a fraction of total duration, in [0.0, 1.0].
    async fn seek_to(&self, fraction: f32);
}

/// A single transport command as observed by the recording backend.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Surface bound to a locator
    Load(String),
    /// Playback started or stopped
    SetPlaying(bool),
    /// Volume level changed
    SetVolume(f32),
    /// Output muted or unmuted
    SetMuted(bool),
    /// Jump to a fractional position
    SeekTo(f32),
}

/// Backend double recording every command in issue order, for testing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Mutex<Vec<PlayerCommand>>,
}

impl RecordingBackend {
    /// Creates a backend with an empty command log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued so far, in order.
    pub fn commands(&self) -> Vec<PlayerCommand> {
        self.commands.lock().clone()
    }
}

#[async_trait]
impl PlayerBackend for RecordingBackend {
    async fn load(&self, url: &str) {
        self.commands.lock().push(PlayerCommand::Load(url.to_string()));
    }

    async fn set_playing(&self, playing: bool) {
        self.commands.lock().push(PlayerCommand::SetPlaying(playing));
    }

    async fn set_volume(&self, volume: f32) {
        self.commands.lock().push(PlayerCommand::SetVolume(volume));
    }

    async fn set_muted(&self, muted: bool) {
        self.commands.lock().push(PlayerCommand::SetMuted(muted));
    }

    async fn seek_to(&self, fraction: f32) {
        self.commands.lock().push(PlayerCommand::SeekTo(fraction));
    }
}
