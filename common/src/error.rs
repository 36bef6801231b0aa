use thiserror::Error;

/// Failures the card can observe. None of them are fatal: the card maps each one to a
/// status line and keeps running.
#[derive(Debug, Error)]
pub enum CardError {
    /// The injected write operation rejected the file.
    #[error("write operation failed: {0}")]
    Write(String),

    /// The file's bytes could not be read from the picker handle.
    #[error("could not read file: {0}")]
    Read(String),

    /// A JSON card configuration did not parse.
    #[error("invalid card configuration: {0}")]
    Config(#[from] serde_json::Error),
}
