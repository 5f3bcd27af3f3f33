//! Sequential batch runner: one request per work item, one output per work item

use log::{error, info, warn};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    connection::ServerConnection,
    dispatch::{command::Command, error::CommandError, params::ItemParams},
    http::Executor,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputItem {
    pub payload: Value,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// raise [`CommandError::UnsupportedOperation`] instead of emitting an empty payload
    pub strict_operations: bool,
}

/// Runs every work item in order, waiting for each response before building the next request.
///
/// The first error aborts the batch and is returned as is. Outputs of the items
/// that already succeeded are discarded, although their requests did reach the server.
pub fn run_batch<E: Executor + ?Sized>(
    items: &[Value],
    conn: &ServerConnection,
    executor: &E,
    options: BatchOptions,
) -> Result<Vec<OutputItem>, CommandError> {
    let headers = conn.auth_headers();
    let mut outputs = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let payload = run_item(item, conn, &headers, executor, options).map_err(|e| {
            error!("item {index} failed, aborting batch of {}: {e}", items.len());
            e
        })?;
        outputs.push(OutputItem { payload });
    }

    Ok(outputs)
}

fn run_item<E: Executor + ?Sized>(
    item: &Value,
    conn: &ServerConnection,
    headers: &[(String, String)],
    executor: &E,
    options: BatchOptions,
) -> Result<Value, CommandError> {
    let params = ItemParams::from_value(item)?;

    let Some(command) = Command::from_params(&params)? else {
        if options.strict_operations {
            return Err(CommandError::UnsupportedOperation {
                resource: params.resource,
                operation: params.operation,
            });
        }
        warn!(
            "no endpoint for {}/{}, skipping item",
            params.resource, params.operation
        );
        return Ok(json!({}));
    };

    let request = command.into_request(conn, headers);
    info!("{} {}", request.method, request.url);

    let response = executor.execute(&request)?;
    Ok(if response.is_null() { json!({}) } else { response })
}
