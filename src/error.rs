//! Error types for the banner generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the banner
///
/// Missing font resources are deliberately absent here: the font probe
/// degrades to the built-in fallback set instead of surfacing an error.
#[derive(Error, Debug)]
pub enum Error {
    /// The pixel surface could not be allocated
    #[error("canvas allocation failed for {width}x{height}")]
    Canvas { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The encoded image could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
