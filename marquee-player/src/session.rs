//! Player session: source resolution wired to a playback surface.

use std::sync::Arc;

use marquee_core::catalog::ContentId;
use marquee_core::config::PlaybackConfig;
use marquee_core::source::{ResolutionTracker, SourceResolver};
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::backend::PlayerBackend;
use crate::controller::PlaybackController;

/// What the session currently renders.
#[derive(Debug, Default)]
pub enum Surface {
    /// No reachable source: a static placeholder with no transport
    /// controls. A valid terminal rendering, not an error.
    #[default]
    Placeholder,
    /// A mounted playback controller bound to a resolved source.
    Active(PlaybackController),
}

impl Surface {
    /// Whether a controller is mounted.
    pub fn is_active(&self) -> bool {
        matches!(self, Surface::Active(_))
    }
}

/// Ties the source resolver to the playback surface for one viewing slot.
///
/// Loading an identifier resolves it and mounts a fresh controller (or the
/// placeholder on a total miss). Each load is tagged through a
/// [`ResolutionTracker`]; when the identifier changes while a resolution is
/// still in flight, the stale completion is discarded so it never
/// overwrites state belonging to the newer identifier.
#[derive(Debug)]
pub struct PlayerSession {
    resolver: SourceResolver,
    playback: PlaybackConfig,
    tracker: ResolutionTracker,
    surface: Mutex<Surface>,
}

impl PlayerSession {
    /// Creates a session rendering the placeholder until a load completes.
    pub fn new(resolver: SourceResolver, playback: PlaybackConfig) -> Self {
        Self {
            resolver,
            playback,
            tracker: ResolutionTracker::new(),
            surface: Mutex::new(Surface::Placeholder),
        }
    }

    /// Resolves an identifier and mounts the resulting surface.
    ///
    /// The backend is consumed by the mount; a fresh backend accompanies
    /// every load, matching the fresh transport state per mount. If a newer
    /// load begins before this one finishes, this completion is dropped.
    pub async fn load(&self, content_id: ContentId, backend: Arc<dyn PlayerBackend>) {
        let ticket = self.tracker.begin(content_id);
        let resolved = self.resolver.resolve(content_id).await;

        if !self.tracker.is_current(&ticket) {
            debug!(content_id = %content_id, "discarding stale resolution");
            return;
        }

        let next = match resolved {
            Some(source) => {
                Surface::Active(PlaybackController::mount(source, &self.playback, backend).await)
            }
            None => Surface::Placeholder,
        };

        // The mount itself may have been overtaken by a newer load.
        if !self.tracker.is_current(&ticket) {
            debug!(content_id = %content_id, "discarding stale mount");
            return;
        }

        *self.surface.lock().await = next;
    }

    /// Locks and returns the current surface.
    pub async fn surface(&self) -> MutexGuard<'_, Surface> {
        self.surface.lock().await
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::config::LibraryConfig;
    use marquee_core::source::MockSourceProbe;

    use super::*;
    use crate::backend::RecordingBackend;

    fn session(probe: Arc<MockSourceProbe>) -> PlayerSession {
        PlayerSession::new(
            SourceResolver::new(probe, LibraryConfig::default()),
            PlaybackConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_load_mounts_active_surface_on_hit() {
        let probe = Arc::new(MockSourceProbe::new().with_present("/videos/42.mkv"));
        let session = session(probe);

        session
            .load(ContentId(42), Arc::new(RecordingBackend::new()))
            .await;

        let surface = session.surface().await;
        match &*surface {
            Surface::Active(controller) => {
                assert_eq!(controller.source().url, "/videos/42.mkv");
            }
            Surface::Placeholder => panic!("expected an active surface"),
        }
    }

    #[tokio::test]
    async fn test_load_renders_placeholder_on_total_miss() {
        let probe = Arc::new(MockSourceProbe::new());
        let session = session(probe);

        session
            .load(ContentId(42), Arc::new(RecordingBackend::new()))
            .await;

        assert!(!session.surface().await.is_active());
    }

    #[tokio::test]
    async fn test_stale_resolution_does_not_overwrite_newer_identifier() {
        let probe = Arc::new(
            MockSourceProbe::new()
                .with_present("/videos/42.mp4")
                .with_present("/videos/7.mp4"),
        );
        let gate = probe.gate("/videos/42.mp4");
        let session = Arc::new(session(probe));

        // The load for 42 parks on its first probe.
        let stale_load = tokio::spawn({
            let session = session.clone();
            async move {
                session
                    .load(ContentId(42), Arc::new(RecordingBackend::new()))
                    .await;
            }
        });
        tokio::task::yield_now().await;

        // The identifier changes to 7 and that load completes first.
        session
            .load(ContentId(7), Arc::new(RecordingBackend::new()))
            .await;

        // Releasing the gate lets 42's probe succeed, but its completion
        // must be discarded as stale.
        gate.notify_one();
        stale_load.await.unwrap();

        let surface = session.surface().await;
        match &*surface {
            Surface::Active(controller) => {
                assert_eq!(controller.source().content_id, ContentId(7));
                assert_eq!(controller.source().url, "/videos/7.mp4");
            }
            Surface::Placeholder => panic!("expected surface for identifier 7"),
        }
    }

    #[tokio::test]
    async fn test_reload_replaces_surface_wholesale() {
        let probe = Arc::new(
            MockSourceProbe::new()
                .with_present("/videos/42.mp4")
                .with_present("/videos/7.mkv"),
        );
        let session = session(probe);

        session
            .load(ContentId(42), Arc::new(RecordingBackend::new()))
            .await;
        session
            .load(ContentId(7), Arc::new(RecordingBackend::new()))
            .await;

        let surface = session.surface().await;
        match &*surface {
            Surface::Active(controller) => {
                assert_eq!(controller.source().url, "/videos/7.mkv");
                // Fresh transport state per mount.
                assert!(!controller.state().playing);
                assert_eq!(controller.state().progress, 0.0);
            }
            Surface::Placeholder => panic!("expected an active surface"),
        }
    }
}
