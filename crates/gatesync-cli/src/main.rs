mod cli;
mod error;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gatesync_api::{RestApiClient, S3ObjectClient, TransportConfig};
use gatesync_core::{Reconciler, RestApiState};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // The region is the single required startup value; failing here means no
    // remote call was ever attempted.
    let region = gatesync_core::load_region()?;

    let transport = TransportConfig::default();
    let endpoint = match cli.global.endpoint {
        Some(url) => url,
        None => RestApiClient::regional_endpoint(&region.name)?,
    };
    let control_plane = Arc::new(RestApiClient::new(endpoint, &transport)?);
    let object_store = Arc::new(S3ObjectClient::new(region.name.clone(), &transport)?);
    let reconciler = Reconciler::new(control_plane, object_store, region);

    tracing::debug!(command = ?cli.command, "dispatching lifecycle operation");
    match cli.command {
        Command::Create(args) => {
            let desired = load_state(&args.desired)?;
            let state = reconciler.create(desired).await?;
            print_state(&state)
        }
        Command::Read(args) => {
            let desired = load_state(&args.desired)?;
            let state = reconciler.read(desired).await?;
            print_state(&state)
        }
        Command::Update(args) => {
            let desired = load_state(&args.desired)?;
            let previous = args.previous.as_deref().map(load_state).transpose()?;
            let state = reconciler.update(desired, previous).await?;
            print_state(&state)
        }
        Command::Delete(args) => {
            let desired = load_state(&args.desired)?;
            reconciler.delete(&desired).await?;
            Ok(())
        }
    }
}

fn load_state(path: &Path) -> Result<RestApiState, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::StateIo {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::StateParse {
        path: path.display().to_string(),
        source,
    })
}

fn print_state(state: &RestApiState) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
