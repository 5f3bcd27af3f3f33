use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::config;
use crate::connection::ServerConnection;
use crate::dispatch::batch::{BatchOptions, run_batch};
use crate::dispatch::route::Endpoint;
use crate::http::client::UreqExecutor;

#[derive(Parser)]
#[command(name = "raspcast")]
#[command(version = "0.1")]
#[command(about = "Remote control for a Rasp-Cast internet radio server")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "raspcast.toml")]
    pub config: PathBuf,

    /// Server base URL, overrides the config file
    #[arg(long)]
    pub server_url: Option<String>,

    /// API key sent as a bearer token, overrides the config file
    #[arg(long)]
    pub api_key: Option<String>,

    /// Fail on unknown resource/operation pairs instead of skipping them
    #[arg(long)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a batch of work items from a JSON file, "-" reads stdin
    Run { input: PathBuf },
    /// Run a single work item
    Call {
        /// stream, playlist, interrupt, schedule or cache
        resource: String,
        operation: String,
        /// Remaining item fields as a JSON object, e.g. '{"trackId": "..."}'
        #[arg(short, long, default_value = "{}")]
        params: String,
    },
    /// Print the supported operations and their endpoints
    Routes,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let items = match &cli.command {
        Commands::Routes => {
            print_routes();
            return Ok(());
        }
        Commands::Run { input } => read_items(input)?,
        Commands::Call {
            resource,
            operation,
            params,
        } => vec![single_item(resource, operation, params)?],
    };

    let cfg = config::Config::load_or_default(&cli.config)?;
    let conn = ServerConnection::resolve(
        &cfg.server,
        cli.server_url.as_deref(),
        cli.api_key.as_deref(),
    );
    log::info!("sending {} item(s) to {}", items.len(), conn.base_url());

    let options = BatchOptions {
        strict_operations: cli.strict || cfg.dispatch.strict_operations,
    };
    let outputs = run_batch(&items, &conn, &UreqExecutor::new(), options)?;

    println!("{}", serde_json::to_string_pretty(&outputs)?);
    Ok(())
}

fn print_routes() {
    for endpoint in Endpoint::ALL {
        let route = endpoint.route();
        println!(
            "{:<10} {:<12} {:<7} {}",
            route.resource, route.operation, route.method, route.template
        );
    }
}

fn read_items(input: &Path) -> anyhow::Result<Vec<Value>> {
    let contents = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "Failed to read work items from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read work items from {}", input.display()))?
    };
    parse_items(&contents)
}

/// accepts a JSON array of work items, or a single work item object
fn parse_items(contents: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value =
        serde_json::from_str(contents).with_context(|| "Failed to parse work items JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        item @ Value::Object(_) => Ok(vec![item]),
        other => bail!("expected a JSON array of work items, got {other}"),
    }
}

fn single_item(resource: &str, operation: &str, params: &str) -> anyhow::Result<Value> {
    let mut item: Value =
        serde_json::from_str(params).with_context(|| "Failed to parse --params JSON")?;
    let Some(fields) = item.as_object_mut() else {
        bail!("--params must be a JSON object");
    };
    fields.insert("resource".into(), resource.into());
    fields.insert("operation".into(), operation.into());
    Ok(item)
}
