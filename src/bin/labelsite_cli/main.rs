//! labelsite-cli: paginated content lists from the command line
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod print;


use clap::Parser;
use labelsite::{config, infra::telemetry};

use args::Cli;
use client::{CliError, build_ctx};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(cli.config_file.as_deref(), &cli.overrides)?;
    telemetry::init(&settings.logging)?;

    let ctx = build_ctx(&cli, &settings)?;
    let (resource, action) = cli.command.into_parts();
    handlers::handle(&ctx, &settings.listing, resource, action).await
}
