//! Catalog data types
//!
//! Content identifiers, container formats, resolved media sources, and the
//! TMDB-shaped movie metadata records surfaced by the catalog UI.

use serde::{Deserialize, Serialize};

/// Opaque numeric key identifying one piece of media in the catalog.
///
/// Supplied by the caller; has no lifecycle of its own beyond naming a
/// resolution target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Video container formats served from the local library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerFormat {
    /// MPEG-4 Part 14 container (.mp4)
    Mp4,
    /// Matroska Video container (.mkv)
    Mkv,
    /// Audio Video Interleave container (.avi)
    Avi,
}

impl ContainerFormat {
    /// Fixed priority order in which candidate files are probed.
    ///
    /// The resolver checks extensions strictly in this order and stops at
    /// the first confirmed hit, so the order determines which container
    /// wins when several variants of the same movie exist.
    pub const PROBE_ORDER: [ContainerFormat; 3] = [
        ContainerFormat::Mp4,
        ContainerFormat::Mkv,
        ContainerFormat::Avi,
    ];

    /// File extension for this container, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ContainerFormat::Mp4 => ".mp4",
            ContainerFormat::Mkv => ".mkv",
            ContainerFormat::Avi => ".avi",
        }
    }

    /// MIME type served for this container.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContainerFormat::Mp4 => "video/mp4",
            ContainerFormat::Mkv => "video/x-matroska",
            ContainerFormat::Avi => "video/x-msvideo",
        }
    }
}

impl Default for ContainerFormat {
    fn default() -> Self {
        Self::Mp4
    }
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerFormat::Mp4 => write!(f, "mp4"),
            ContainerFormat::Mkv => write!(f, "mkv"),
            ContainerFormat::Avi => write!(f, "avi"),
        }
    }
}

/// The first confirmed-reachable media file for a content identifier.
///
/// Created once per resolution and never mutated; a new identifier gets a
/// wholesale replacement. Absence of a source is represented by
/// `Option::None`, which is a valid terminal state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSource {
    /// Identifier the resolution was performed for.
    pub content_id: ContentId,
    /// Locator of the confirmed-reachable file, e.g. `/videos/42.mkv`.
    pub url: String,
    /// Container format of the winning candidate.
    pub format: ContainerFormat,
}

/// Movie summary as returned by catalog listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: ContentId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub vote_average: f32,
    pub genre_ids: Vec<u32>,
}

impl Movie {
    /// Release year parsed from the `YYYY-MM-DD` release date, if present.
    pub fn release_year(&self) -> Option<u16> {
        self.release_date.get(..4).and_then(|y| y.parse().ok())
    }
}

/// Genre tag attached to detailed movie records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full movie record as returned by the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: ContentId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub vote_average: f32,
    pub genres: Vec<Genre>,
    pub runtime: u32,
    pub status: String,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
}

impl MovieDetails {
    /// Runtime formatted as `1h 52m` for display.
    pub fn format_runtime(&self) -> String {
        let hours = self.runtime / 60;
        let minutes = self.runtime % 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_order_is_mp4_first() {
        let extensions: Vec<&str> = ContainerFormat::PROBE_ORDER
            .iter()
            .map(|f| f.extension())
            .collect();
        assert_eq!(extensions, vec![".mp4", ".mkv", ".avi"]);
    }

    #[test]
    fn test_content_id_display() {
        assert_eq!(ContentId(42).to_string(), "42");
    }

    #[test]
    fn test_movie_release_year() {
        let movie = Movie {
            id: ContentId(603),
            title: "The Matrix".to_string(),
            overview: "A computer hacker learns the truth.".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            release_date: "1999-03-31".to_string(),
            vote_average: 8.2,
            genre_ids: vec![28, 878],
        };

        assert_eq!(movie.release_year(), Some(1999));
    }

    #[test]
    fn test_movie_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker learns the truth.",
            "poster_path": "/poster.jpg",
            "backdrop_path": null,
            "release_date": "1999-03-31",
            "vote_average": 8.2,
            "genre_ids": [28, 878]
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, ContentId(603));
        assert_eq!(movie.title, "The Matrix");
        assert!(movie.backdrop_path.is_none());
    }

    #[test]
    fn test_format_runtime() {
        let details = MovieDetails {
            id: ContentId(603),
            title: "The Matrix".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: "1999-03-31".to_string(),
            vote_average: 8.2,
            genres: vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }],
            runtime: 136,
            status: "Released".to_string(),
            tagline: None,
            homepage: None,
        };

        assert_eq!(details.format_runtime(), "2h 16m");
    }
}
