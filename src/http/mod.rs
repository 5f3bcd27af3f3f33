use serde_json::Value;

use crate::dispatch::{command::RequestBody, error::CommandError, route::Method};

pub mod client;
pub mod error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// Performs one HTTP call.
///
/// Returns the parsed JSON response (`null` for an empty body), or fails with
/// [`CommandError::Transport`] / [`CommandError::Remote`].
pub trait Executor {
    fn execute(&self, request: &HttpRequest) -> Result<Value, CommandError>;
}

/// Parses a response body, keeping non JSON text as a JSON string.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
