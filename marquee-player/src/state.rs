//! Transport state owned by one mounted playback surface.

use serde::{Deserialize, Serialize};

/// Transient transport state for one mounted playback surface.
///
/// Created fresh when a controller mounts for a content identifier and
/// discarded on unmount; never persisted. `muted` and `volume` are
/// deliberately decoupled flags: muting does not zero the stored volume and
/// unmuting does not restore a prior level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Whether the player is currently commanded to play
    pub playing: bool,
    /// Volume level in [0.0, 1.0]
    pub volume: f32,
    /// Whether output is muted
    pub muted: bool,
    /// Playback position as a percentage of total duration, in [0.0, 100.0]
    pub progress: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            volume: 0.5,
            muted: false,
            progress: 0.0,
        }
    }
}

impl PlaybackState {
    /// Fresh state with the configured starting volume.
    pub fn with_volume(volume: f32) -> Self {
        Self {
            volume,
            ..Default::default()
        }
    }
}

/// Periodic progress event from the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Playback position as a fraction of total duration, in [0.0, 1.0]
    pub played: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PlaybackState::default();

        assert!(!state.playing);
        assert_eq!(state.volume, 0.5);
        assert!(!state.muted);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_with_volume_keeps_other_defaults() {
        let state = PlaybackState::with_volume(0.8);

        assert_eq!(state.volume, 0.8);
        assert!(!state.playing);
        assert!(!state.muted);
    }
}
