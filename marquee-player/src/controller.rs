//! Transport control over a resolved media source.

use std::sync::Arc;

use marquee_core::catalog::ResolvedSource;
use marquee_core::config::PlaybackConfig;
use tracing::trace;

use crate::backend::PlayerBackend;
use crate::state::{PlaybackState, ProgressReport};

/// Playback controller bound to one resolved source.
///
/// Owns the transport state for the lifetime of one mounted surface and
/// translates control input into commands against the embedded player
/// capability. All side effects stay local: the state record and the
/// backend, nothing else.
#[derive(Debug)]
pub struct PlaybackController {
    source: ResolvedSource,
    state: PlaybackState,
    backend: Arc<dyn PlayerBackend>,
}

impl PlaybackController {
    /// Mounts a controller for a resolved source.
    ///
    /// Binds the backend to the source locator and pushes the configured
    /// starting volume. The transport state starts fresh: paused, unmuted,
    /// progress at zero.
    pub async fn mount(
        source: ResolvedSource,
        playback: &PlaybackConfig,
        backend: Arc<dyn PlayerBackend>,
    ) -> Self {
        backend.load(&source.url).await;
        backend.set_volume(playback.default_volume).await;

        Self {
            state: PlaybackState::with_volume(playback.default_volume),
            source,
            backend,
        }
    }

    /// Flips between playing and paused.
    ///
    /// Self-inverse: two consecutive toggles restore the original state.
    pub async fn toggle_playback(&mut self) {
        self.state.playing = !self.state.playing;
        trace!(playing = self.state.playing, "playback toggled");
        self.backend.set_playing(self.state.playing).await;
    }

    /// Jumps to a position expressed as a percentage of total duration.
    ///
    /// The displayed progress updates optimistically before the backend is
    /// commanded, so the UI never waits on the player. A stale periodic
    /// report arriving afterwards simply overwrites it (last-write-wins).
    pub async fn seek(&mut self, percent: f32) {
        self.state.progress = percent;
        self.backend.seek_to(percent / 100.0).await;
    }

    /// Sets the volume level, in [0.0, 1.0].
    ///
    /// A level of exactly zero forces mute; any positive level leaves the
    /// mute flag untouched.
    pub async fn set_volume(&mut self, level: f32) {
        self.state.volume = level;
        self.backend.set_volume(level).await;

        if level == 0.0 && !self.state.muted {
            self.state.muted = true;
            self.backend.set_muted(true).await;
        }
    }

    /// Flips the mute flag, independent of the stored volume level.
    ///
    /// Unmuting does not restore a prior volume; the two fields are
    /// decoupled on purpose.
    pub async fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        self.backend.set_muted(self.state.muted).await;
    }

    /// Applies a periodic progress report from the player.
    ///
    /// Converts the played fraction to the percentage display scale. No
    /// reconciliation with manual seeks: the latest write wins.
    pub fn handle_progress(&mut self, report: ProgressReport) {
        self.state.progress = report.played * 100.0;
    }

    /// Current transport state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The source this surface is bound to.
    pub fn source(&self) -> &ResolvedSource {
        &self.source
    }
}
