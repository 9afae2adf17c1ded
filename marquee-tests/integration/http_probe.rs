//! End-to-end resolution through the HTTP existence probe.
//!
//! Spins up an in-process static server answering header-only requests and
//! verifies the resolver's scan order and terminal states against it.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use marquee_core::catalog::{ContainerFormat, ContentId};
use marquee_core::config::LibraryConfig;
use marquee_core::source::{HttpSourceProbe, SourceProbe, SourceResolver};

/// Starts a static server exposing exactly the given video paths.
///
/// Routes are plain GET handlers; axum answers HEAD requests for them with
/// the same status and an empty body, which is all the probe needs.
async fn serve_videos(paths: &[&str]) -> String {
    let mut app = Router::new();
    for &path in paths {
        app = app.route(path, get(|| async { StatusCode::OK }));
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("server address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test videos");
    });

    format!("http://{addr}")
}

fn resolver_for(origin: String) -> SourceResolver {
    let probe = Arc::new(HttpSourceProbe::with_origin(origin));
    SourceResolver::new(probe, LibraryConfig::default())
}

#[tokio::test]
async fn test_resolves_second_priority_container_over_http() {
    let origin = serve_videos(&["/videos/42.mkv"]).await;
    let resolver = resolver_for(origin);

    let resolved = resolver
        .resolve(ContentId(42))
        .await
        .expect("42.mkv is served");

    assert_eq!(resolved.url, "/videos/42.mkv");
    assert_eq!(resolved.format, ContainerFormat::Mkv);
}

#[tokio::test]
async fn test_prefers_mp4_when_both_containers_exist() {
    let origin = serve_videos(&["/videos/42.mp4", "/videos/42.mkv"]).await;
    let resolver = resolver_for(origin);

    let resolved = resolver
        .resolve(ContentId(42))
        .await
        .expect("42.mp4 is served");

    assert_eq!(resolved.format, ContainerFormat::Mp4);
}

#[tokio::test]
async fn test_total_miss_over_http_is_none() {
    let origin = serve_videos(&["/videos/7.mp4"]).await;
    let resolver = resolver_for(origin);

    assert!(resolver.resolve(ContentId(99)).await.is_none());
}

#[tokio::test]
async fn test_unreachable_namespace_is_a_terminal_miss() {
    // Bind a port and release it so connections are refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let resolver = resolver_for(format!("http://{addr}"));

    // Every probe errors at the transport level; the miss is terminal, not fatal.
    assert!(resolver.resolve(ContentId(42)).await.is_none());
}

#[tokio::test]
async fn test_head_probe_confirms_existence_without_a_body() {
    let origin = serve_videos(&["/videos/1.mp4"]).await;
    let probe = HttpSourceProbe::with_origin(origin);

    assert!(probe.exists("/videos/1.mp4").await.expect("probe succeeds"));
    assert!(!probe.exists("/videos/2.mp4").await.expect("probe succeeds"));
}
