//! Unified error type for roomcrawl.

use roomcrawl_clock::ClockError;
use roomcrawl_codec::{CodecError, StoreError};
use roomcrawl_graph::GraphError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// Generation failed or a room set broke a graph invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A room file was malformed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Saving or loading a room set failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A time query failed.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Reading player input or writing game output failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ran out before the player reached the end room.
    #[error("input closed before the end room was reached")]
    InputClosed,
}
