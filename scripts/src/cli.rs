//! Definitions of CLI arguments and commands for the deploy steps

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{list_steps, run},
    constants::{DEFAULT_NAMED_ACCOUNT, DEFAULT_RPC_URL, MIGRATIONS_FILE},
    errors::ScriptError,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private keys of the available signers, in order
    #[arg(short, long = "priv-key", env = "PKEY", value_delimiter = ',')]
    pub priv_keys: Vec<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the deployments, either a hardhat-deploy network directory
    /// or a flat `deployments.json` file
    #[arg(short, long, env = "DEPLOYMENTS_PATH")]
    pub deployments: PathBuf,

    /// Named accounts, as `name=index` into the signer list
    #[arg(long = "named-account", default_value = DEFAULT_NAMED_ACCOUNT)]
    pub named_accounts: Vec<String>,

    /// Path to the record of completed steps, defaults to
    /// `.migrations.json` alongside the deployments
    #[arg(long)]
    pub migrations: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The path of the migrations record
    pub fn migrations_path(&self) -> PathBuf {
        if let Some(path) = &self.migrations {
            return path.clone();
        }

        let dir = if self.deployments.is_dir() {
            self.deployments.as_path()
        } else {
            self.deployments.parent().unwrap_or_else(|| Path::new("."))
        };
        dir.join(MIGRATIONS_FILE)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the registered steps along with their tags
    List,
    /// Run the registered steps
    Run(RunArgs),
}

/// Run the steps selected by tag
#[derive(Args)]
pub struct RunArgs {
    /// Only run steps carrying one of these tags; all steps run if unset
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

impl Command {
    pub async fn run(&self, cli: &Cli) -> Result<(), ScriptError> {
        match self {
            Command::List => {
                list_steps();
                Ok(())
            }
            Command::Run(args) => run(args, cli).await,
        }
    }
}
