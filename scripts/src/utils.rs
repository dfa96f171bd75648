//! Utilities for the deploy steps.

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::info;

use crate::{deployments::DeploymentRegistry, errors::ScriptError};

/// Parse the RPC URL the pipeline runs against
pub fn parse_rpc_url(rpc_url: &str) -> Result<Url, ScriptError> {
    Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Sets up a provider which signs transactions with the given signer.
///
/// No request is made to the RPC until the provider is used.
pub fn setup_client(signer: &PrivateKeySigner, rpc_url: &Url) -> DynProvider {
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer.clone()))
        .connect_http(rpc_url.clone());

    DynProvider::new(provider)
}

/// Check that the registry, if it records a chain ID, was written against
/// the chain the provider serves
pub async fn verify_chain_id(
    registry: &dyn DeploymentRegistry,
    provider: &impl Provider,
) -> Result<(), ScriptError> {
    let Some(expected) = registry.chain_id()? else {
        return Ok(());
    };

    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    check_chain_id(expected, actual)?;
    info!("deployments match chain {}", actual);
    Ok(())
}

/// Compare the registry's chain ID against the RPC's
fn check_chain_id(expected: u64, actual: u64) -> Result<(), ScriptError> {
    if expected != actual {
        return Err(ScriptError::ChainMismatch(format!(
            "deployments were recorded on chain {}, but the RPC serves chain {}",
            expected, actual
        )));
    }

    Ok(())
}
