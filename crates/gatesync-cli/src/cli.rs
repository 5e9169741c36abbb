//! Command-line surface: one subcommand per lifecycle operation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "gatesync",
    version,
    about = "Reconcile a declared REST API resource against its remote state"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Control-plane endpoint override (defaults to the regional endpoint)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<url::Url>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the resource from a desired state document
    Create(StateArgs),
    /// Verify the resource exists remotely
    Read(StateArgs),
    /// Move the remote resource to the desired state
    Update(UpdateArgs),
    /// Delete the resource
    Delete(StateArgs),
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// Path to the desired state JSON document
    #[arg(value_name = "DESIRED")]
    pub desired: PathBuf,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Path to the desired state JSON document
    #[arg(value_name = "DESIRED")]
    pub desired: PathBuf,

    /// Path to the last-known previous state JSON document
    #[arg(long, value_name = "PATH")]
    pub previous: Option<PathBuf>,
}
