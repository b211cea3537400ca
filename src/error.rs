use std::path::PathBuf;

/// Errors surfaced across the build and serve pipelines.
///
/// Parse/IO/persistence failures are fatal: the caller prints `Display` to
/// stderr and exits non-zero. Per-request "not found" conditions are not
/// modeled here — they are ordinary `Option::None` returns that the query
/// dispatcher turns into `error_message` fields, never a process abort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input document: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("malformed input document: {0}")]
    ParseInput(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    WriteOutput(#[source] serde_json::Error),

    #[error("failed to open persisted state file {path:?}: {source}")]
    OpenState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write persisted state file {path:?}: {source}")]
    WriteState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode persisted state: {0}")]
    EncodeState(#[source] bincode::Error),

    #[error("failed to decode persisted state: {0}")]
    DecodeState(#[source] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
