//! Implementations of the CLI commands

use tracing::info;

use crate::{
    accounts::{Accounts, NamedAccounts},
    cli::{Cli, RunArgs},
    deployments::open_registry,
    errors::ScriptError,
    runner::{run_steps, Migrations},
    steps::{all_steps, DeployContext},
    utils::{parse_rpc_url, verify_chain_id},
};

/// Print each registered step with its tags
pub fn list_steps() {
    for step in all_steps() {
        println!("{}\t[{}]", step.id(), step.tags().join(", "));
    }
}

/// Run the steps selected by `args` against the configured chain
pub async fn run(args: &RunArgs, cli: &Cli) -> Result<(), ScriptError> {
    let named = NamedAccounts::parse(&cli.named_accounts)?;
    let accounts = Accounts::from_private_keys(named, &cli.priv_keys)?;
    let ctx = DeployContext {
        deployments: open_registry(&cli.deployments)?,
        accounts,
        rpc_url: parse_rpc_url(&cli.rpc_url)?,
    };

    info!("{} signer(s) configured", ctx.accounts.signers().len());
    let provider = ctx.signer_provider(ctx.accounts.first_signer()?);
    verify_chain_id(ctx.deployments.as_ref(), &provider).await?;

    let mut migrations = Migrations::load(&cli.migrations_path())?;
    let steps = all_steps();
    let ran = run_steps(&ctx, &steps, &args.tags, &mut migrations)?;

    info!("ran {} step(s): {}", ran.len(), ran.join(", "));
    if migrations.has_updates() {
        info!("recorded completed steps in {}", cli.migrations_path().display());
    }

    Ok(())
}
