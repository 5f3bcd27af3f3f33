use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with status {status}: {body}")]
    Remote { status: u16, body: Value },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unsupported operation '{operation}' for resource '{resource}'")]
    UnsupportedOperation { resource: String, operation: String },
}
