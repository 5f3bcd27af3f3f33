//! Blocking HTTP executor backed by `ureq`.

use log::debug;
use serde_json::Value;

use crate::{
    dispatch::error::CommandError,
    http::{Executor, HttpRequest, parse_body},
};

/// Sends requests with the agent's default settings: no timeout or retry is configured here.
pub struct UreqExecutor {
    http_client: ureq::Agent,
}

impl UreqExecutor {
    pub fn new() -> Self {
        Self {
            http_client: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for UreqExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<Value, CommandError> {
        let mut call = self
            .http_client
            .request(request.method.as_str(), &request.url)
            .set("Accept", "application/json");
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let response = match &request.body {
            Some(body) => call.send_json(body)?,
            None => call.call()?,
        };
        debug!("{} {} -> {}", request.method, request.url, response.status());

        let text = response
            .into_string()
            .map_err(|e| CommandError::Transport(format!("failed to read response body: {e}")))?;
        Ok(parse_body(&text))
    }
}
