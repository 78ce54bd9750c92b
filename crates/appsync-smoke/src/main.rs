use std::path::PathBuf;

use appsync_smoke::graphql::{Client, default_headers};
use appsync_smoke::operations::PublishCase;
use appsync_smoke::runner;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use runtime::{read_config, read_config_from_env};
use tracing::{Level, info};

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the smoke client
#[derive(Debug, clap::Parser)]
#[command(
    styles = STYLES,
    about = "AppSync smoke client - send the publishMessage mutations and print the responses",
)]
struct Args {
    /// Path to a YAML config file. Environment variables take precedence over it
    config: Option<PathBuf>,

    /// Cases to run, in the order given. Runs every case when omitted
    #[arg(long = "case", short = 'c', value_enum, action = clap::ArgAction::Append)]
    cases: Vec<PublishCase>,

    /// Override the configured log level
    #[arg(long = "log", short = 'l')]
    log_level: Option<Level>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => read_config_from_env()?,
    };
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    let _guard = runtime::setup_logging(&config.logging)?;

    info!("AppSync smoke client v{}", std::env!("CARGO_PKG_VERSION"));

    let endpoint = config.endpoint()?;
    let headers = default_headers(&config.auth_token, &config.headers)?;
    let client = Client::new(endpoint.into_inner(), headers, config.timeout)?;

    let cases = if args.cases.is_empty() {
        PublishCase::ALL.to_vec()
    } else {
        args.cases
    };

    runner::run(&client, &cases, &mut std::io::stdout()).await?;
    Ok(())
}
