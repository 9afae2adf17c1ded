//! Full session flow: resolve, mount, and drive the transport.

use std::sync::Arc;

use marquee_core::catalog::ContentId;
use marquee_core::config::{LibraryConfig, PlaybackConfig};
use marquee_core::source::{MockSourceProbe, SourceResolver};
use marquee_player::backend::{PlayerCommand, RecordingBackend};
use marquee_player::session::{PlayerSession, Surface};
use marquee_player::state::ProgressReport;

fn session_with(probe: Arc<MockSourceProbe>) -> PlayerSession {
    PlayerSession::new(
        SourceResolver::new(probe, LibraryConfig::default()),
        PlaybackConfig::default(),
    )
}

#[tokio::test]
async fn test_transport_commands_reach_the_backend_in_order() {
    let probe = Arc::new(MockSourceProbe::new().with_present("/videos/42.mp4"));
    let session = session_with(probe);
    let backend = Arc::new(RecordingBackend::new());

    session.load(ContentId(42), backend.clone()).await;

    let mut surface = session.surface().await;
    let controller = match &mut *surface {
        Surface::Active(controller) => controller,
        Surface::Placeholder => panic!("expected an active surface"),
    };

    controller.toggle_playback().await;
    controller.seek(50.0).await;
    controller.set_volume(0.0).await;
    controller.toggle_mute().await;
    controller.handle_progress(ProgressReport { played: 0.75 });

    assert_eq!(
        backend.commands(),
        vec![
            PlayerCommand::Load("/videos/42.mp4".to_string()),
            PlayerCommand::SetVolume(0.5),
            PlayerCommand::SetPlaying(true),
            PlayerCommand::SeekTo(0.5),
            PlayerCommand::SetVolume(0.0),
            PlayerCommand::SetMuted(true),
            PlayerCommand::SetMuted(false),
        ]
    );
    assert_eq!(controller.state().progress, 75.0);
    assert!(controller.state().playing);
    assert!(!controller.state().muted);
}

#[tokio::test]
async fn test_placeholder_surface_exposes_no_controller() {
    let probe = Arc::new(MockSourceProbe::new());
    let session = session_with(probe.clone());

    session
        .load(ContentId(404), Arc::new(RecordingBackend::new()))
        .await;

    assert!(!session.surface().await.is_active());
    // Every candidate was probed exactly once before giving up.
    assert_eq!(
        probe.probed(),
        vec!["/videos/404.mp4", "/videos/404.mkv", "/videos/404.avi"]
    );
}

#[tokio::test]
async fn test_identifier_change_discards_in_flight_resolution() {
    let probe = Arc::new(
        MockSourceProbe::new()
            .with_present("/videos/42.mp4")
            .with_present("/videos/7.avi"),
    );
    let gate = probe.gate("/videos/42.mp4");
    let session = Arc::new(session_with(probe));

    let stale_backend = Arc::new(RecordingBackend::new());
    let stale_load = tokio::spawn({
        let session = session.clone();
        let backend = stale_backend.clone();
        async move {
            session.load(ContentId(42), backend).await;
        }
    });
    tokio::task::yield_now().await;

    session
        .load(ContentId(7), Arc::new(RecordingBackend::new()))
        .await;

    gate.notify_one();
    stale_load.await.expect("stale load finishes");

    // The surface belongs to 7; the stale backend was never even loaded.
    let surface = session.surface().await;
    match &*surface {
        Surface::Active(controller) => {
            assert_eq!(controller.source().content_id, ContentId(7));
        }
        Surface::Placeholder => panic!("expected surface for identifier 7"),
    }
    assert!(stale_backend.commands().is_empty());
}
