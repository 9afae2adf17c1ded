//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub library: LibraryConfig,
    pub network: NetworkConfig,
    pub playback: PlaybackConfig,
}

/// Local video library configuration.
///
/// Controls where candidate media files are looked up. The extension probe
/// order itself is fixed (`ContainerFormat::PROBE_ORDER`) so resolution
/// stays deterministic regardless of configuration.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Base path of the static video namespace
    pub video_root: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            video_root: "/videos".to_string(),
        }
    }
}

/// Network configuration for existence probes.
///
/// Controls the origin of the static asset server and HTTP request
/// parameters for the header-only existence checks.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Origin of the static asset server hosting the video namespace
    pub origin: String,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Per-probe timeout (None = a stalled probe stalls that resolution)
    pub probe_timeout: Option<Duration>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".to_string(),
            user_agent: "marquee/0.1.0",
            probe_timeout: None, // Local trusted namespace, no deadline
        }
    }
}

/// Playback surface configuration.
///
/// Controls the initial transport state handed to a freshly mounted
/// playback controller and the cadence of progress reports.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Volume level a fresh playback surface starts with (0.0 to 1.0)
    pub default_volume: f32,
    /// Interval between periodic progress reports from the player
    pub progress_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.5,
            progress_interval: Duration::from_secs(1),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(root) = std::env::var("MARQUEE_VIDEO_ROOT") {
            config.library.video_root = root;
        }

        if let Ok(origin) = std::env::var("MARQUEE_ORIGIN") {
            config.network.origin = origin;
        }

        if let Ok(timeout) = std::env::var("MARQUEE_PROBE_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.network.probe_timeout = Some(Duration::from_secs(seconds));
            }
        }

        if let Ok(interval) = std::env::var("MARQUEE_PROGRESS_INTERVAL_MS") {
            if let Ok(millis) = interval.parse::<u64>() {
                config.playback.progress_interval = Duration::from_millis(millis);
            }
        }

        config
    }

    /// Creates a configuration optimized for testing.
    ///
    /// Short intervals and a probe deadline so tests fail fast instead of
    /// hanging on an unreachable namespace.
    pub fn for_testing() -> Self {
        Self {
            network: NetworkConfig {
                probe_timeout: Some(Duration::from_secs(2)),
                ..Default::default()
            },
            playback: PlaybackConfig {
                progress_interval: Duration::from_millis(10),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.library.video_root, "/videos");
        assert_eq!(config.network.origin, "http://localhost:8080");
        assert_eq!(config.network.user_agent, "marquee/0.1.0");
        assert_eq!(config.network.probe_timeout, None);
        assert_eq!(config.playback.default_volume, 0.5);
        assert_eq!(config.playback.progress_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_testing_preset() {
        let config = MarqueeConfig::for_testing();

        assert_eq!(config.network.probe_timeout, Some(Duration::from_secs(2)));
        assert_eq!(
            config.playback.progress_interval,
            Duration::from_millis(10)
        );
        assert_eq!(config.library.video_root, "/videos");
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("MARQUEE_VIDEO_ROOT", "/media/library");
            std::env::set_var("MARQUEE_ORIGIN", "http://media.local:9000");
            std::env::set_var("MARQUEE_PROBE_TIMEOUT", "5");
            std::env::set_var("MARQUEE_PROGRESS_INTERVAL_MS", "250");
        }

        let config = MarqueeConfig::from_env();

        assert_eq!(config.library.video_root, "/media/library");
        assert_eq!(config.network.origin, "http://media.local:9000");
        assert_eq!(config.network.probe_timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            config.playback.progress_interval,
            Duration::from_millis(250)
        );

        // Cleanup
        unsafe {
            std::env::remove_var("MARQUEE_VIDEO_ROOT");
            std::env::remove_var("MARQUEE_ORIGIN");
            std::env::remove_var("MARQUEE_PROBE_TIMEOUT");
            std::env::remove_var("MARQUEE_PROGRESS_INTERVAL_MS");
        }
    }
}
