use crate::cli::run;

pub mod cli;
mod config;
mod connection;
pub mod dispatch;
pub mod domain;
pub mod http;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run()
}
