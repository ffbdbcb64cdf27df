//! Error types shared across the workspace.
//!
//! Library code returns `D20Error` via `thiserror`; the binary wraps
//! everything in `anyhow` at its edge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum D20Error {
    /// IO errors (stats file, terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The user's home directory could not be resolved.
    #[error("Home directory not found")]
    HomeNotFound,

    /// Trigger channel errors.
    #[error("Channel error: receiver dropped")]
    ChannelClosed,
}

pub type D20Result<T> = Result<T, D20Error>;
