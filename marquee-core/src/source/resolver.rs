//! Sequential first-wins source resolution with stale-result suppression.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use super::SourceProbe;
use crate::catalog::{ContainerFormat, ContentId, ResolvedSource};
use crate::config::LibraryConfig;

/// One candidate locator in the fixed probe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidate {
    /// Candidate locator, e.g. `/videos/42.mkv`
    pub url: String,
    /// Container format the candidate's extension implies
    pub format: ContainerFormat,
}

/// Resolves content identifiers to reachable media files.
///
/// Builds the candidate list `{video_root}/{id}{ext}` for each extension in
/// `ContainerFormat::PROBE_ORDER` and probes strictly sequentially, one
/// candidate at a time. The first confirmed hit wins and stops the scan, so
/// the result is deterministic given a static namespace. Transport failures
/// on a single candidate are logged and swallowed; the scan continues with
/// the next candidate and no candidate is ever retried.
#[derive(Debug)]
pub struct SourceResolver {
    probe: Arc<dyn SourceProbe>,
    library: LibraryConfig,
}

impl SourceResolver {
    /// Creates a resolver probing through the given existence check.
    pub fn new(probe: Arc<dyn SourceProbe>, library: LibraryConfig) -> Self {
        Self { probe, library }
    }

    /// Ordered candidate locators for an identifier.
    pub fn candidates(&self, content_id: ContentId) -> Vec<SourceCandidate> {
        ContainerFormat::PROBE_ORDER
            .iter()
            .map(|format| SourceCandidate {
                url: format!(
                    "{}/{}{}",
                    self.library.video_root.trim_end_matches('/'),
                    content_id,
                    format.extension()
                ),
                format: *format,
            })
            .collect()
    }

    /// Resolves an identifier to the first reachable candidate.
    ///
    /// Returns `None` when every candidate misses or errors; that is a
    /// valid terminal state surfaced as a placeholder UI, not a failure.
    pub async fn resolve(&self, content_id: ContentId) -> Option<ResolvedSource> {
        for candidate in self.candidates(content_id) {
            match self.probe.exists(&candidate.url).await {
                Ok(true) => {
                    debug!(
                        content_id = %content_id,
                        url = %candidate.url,
                        "resolved media source"
                    );
                    return Some(ResolvedSource {
                        content_id,
                        url: candidate.url,
                        format: candidate.format,
                    });
                }
                Ok(false) => {
                    debug!(url = %candidate.url, "candidate not present");
                }
                Err(e) => {
                    // Recovered locally: the scan moves on to the next candidate.
                    warn!(url = %candidate.url, error = %e, "existence probe failed");
                }
            }
        }

        debug!(content_id = %content_id, "no reachable source");
        None
    }
}

/// Tags resolution attempts so stale completions can be discarded.
///
/// An identifier change while a resolution is in flight must not let the
/// old result overwrite state belonging to the new identifier. Each attempt
/// gets a ticket carrying the identifier and a monotonically increasing
/// generation; a completion commits only while its ticket is still current.
#[derive(Debug, Default)]
pub struct ResolutionTracker {
    generation: AtomicU64,
}

/// Tag for a single resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket {
    content_id: ContentId,
    generation: u64,
}

impl ResolutionTicket {
    /// Identifier this attempt was started for.
    pub fn content_id(&self) -> ContentId {
        self.content_id
    }
}

impl ResolutionTracker {
    /// Creates a tracker with no attempts issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new attempt, invalidating every earlier ticket.
    pub fn begin(&self, content_id: ContentId) -> ResolutionTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        ResolutionTicket {
            content_id,
            generation,
        }
    }

    /// Whether the ticket belongs to the most recently begun attempt.
    pub fn is_current(&self, ticket: &ResolutionTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSourceProbe;

    fn resolver(probe: MockSourceProbe) -> (Arc<MockSourceProbe>, SourceResolver) {
        let probe = Arc::new(probe);
        let resolver = SourceResolver::new(probe.clone(), LibraryConfig::default());
        (probe, resolver)
    }

    #[test]
    fn test_candidates_follow_fixed_probe_order() {
        let (_, resolver) = resolver(MockSourceProbe::new());

        let urls: Vec<String> = resolver
            .candidates(ContentId(42))
            .into_iter()
            .map(|c| c.url)
            .collect();

        assert_eq!(
            urls,
            vec!["/videos/42.mp4", "/videos/42.mkv", "/videos/42.avi"]
        );
    }

    #[test]
    fn test_candidates_respect_configured_root() {
        let probe = Arc::new(MockSourceProbe::new());
        let resolver = SourceResolver::new(
            probe,
            LibraryConfig {
                video_root: "/media/library/".to_string(),
            },
        );

        let first = &resolver.candidates(ContentId(7))[0];
        assert_eq!(first.url, "/media/library/7.mp4");
        assert_eq!(first.format, ContainerFormat::Mp4);
    }

    #[tokio::test]
    async fn test_first_hit_wins_and_stops_the_scan() {
        let (probe, resolver) = resolver(MockSourceProbe::new().with_present("/videos/42.mkv"));

        let resolved = resolver.resolve(ContentId(42)).await.unwrap();

        assert_eq!(resolved.url, "/videos/42.mkv");
        assert_eq!(resolved.format, ContainerFormat::Mkv);
        assert_eq!(resolved.content_id, ContentId(42));
        // .avi is never probed once .mkv hits.
        assert_eq!(probe.probed(), vec!["/videos/42.mp4", "/videos/42.mkv"]);
    }

    #[tokio::test]
    async fn test_highest_priority_hit_probes_nothing_else() {
        let (probe, resolver) = resolver(MockSourceProbe::new().with_present("/videos/42.mp4"));

        let resolved = resolver.resolve(ContentId(42)).await.unwrap();

        assert_eq!(resolved.url, "/videos/42.mp4");
        assert_eq!(probe.probed(), vec!["/videos/42.mp4"]);
    }

    #[tokio::test]
    async fn test_total_miss_probes_every_candidate_once() {
        let (probe, resolver) = resolver(MockSourceProbe::new());

        assert!(resolver.resolve(ContentId(42)).await.is_none());
        assert_eq!(
            probe.probed(),
            vec!["/videos/42.mp4", "/videos/42.mkv", "/videos/42.avi"]
        );
    }

    #[tokio::test]
    async fn test_probe_failure_continues_the_scan() {
        let (probe, resolver) = resolver(
            MockSourceProbe::new()
                .with_failure("/videos/42.mp4")
                .with_present("/videos/42.avi"),
        );

        let resolved = resolver.resolve(ContentId(42)).await.unwrap();

        assert_eq!(resolved.format, ContainerFormat::Avi);
        // The failed candidate was not retried.
        assert_eq!(
            probe.probed(),
            vec!["/videos/42.mp4", "/videos/42.mkv", "/videos/42.avi"]
        );
    }

    #[tokio::test]
    async fn test_all_failures_is_a_terminal_miss() {
        let (_, resolver) = resolver(
            MockSourceProbe::new()
                .with_failure("/videos/42.mp4")
                .with_failure("/videos/42.mkv")
                .with_failure("/videos/42.avi"),
        );

        assert!(resolver.resolve(ContentId(42)).await.is_none());
    }

    #[test]
    fn test_tracker_invalidates_earlier_tickets() {
        let tracker = ResolutionTracker::new();

        let first = tracker.begin(ContentId(42));
        assert!(tracker.is_current(&first));

        let second = tracker.begin(ContentId(7));
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert_eq!(second.content_id(), ContentId(7));
    }
}
