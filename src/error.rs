use thiserror::Error;

/// Errors that can occur while loading a node document.
///
/// Label and id resolution and group filtering are total and never fail;
/// only decoding input can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Failed to parse node JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read node document '{path}': {message}")]
    Io { path: String, message: String },
}
