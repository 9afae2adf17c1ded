//! Marquee Core - Source resolution and catalog foundations
//!
//! This crate provides the fundamental building blocks for the Marquee
//! movie front-end: catalog data types, media source resolution against a
//! static video namespace, and configuration management.

pub mod catalog;
pub mod config;
pub mod source;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{ContainerFormat, ContentId, Movie, MovieDetails, ResolvedSource};
pub use config::MarqueeConfig;
pub use source::{
    HttpSourceProbe, MockSourceProbe, ResolutionTicket, ResolutionTracker, SourceError,
    SourceProbe, SourceResolver,
};

/// Core errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
