//! The deploy steps run by the pipeline, and the context they run in

use alloy::{
    providers::DynProvider, signers::local::PrivateKeySigner, transports::http::reqwest::Url,
};

use crate::{
    accounts::Accounts, deployments::DeploymentRegistry, errors::ScriptError, utils::setup_client,
};

mod stk_aave_upgrade;

pub use stk_aave_upgrade::StkAaveUpgrade;

/// A single named step of the deployment pipeline
pub trait DeployStep {
    /// The unique identifier of the step, recorded in the migrations
    /// once the step completes
    fn id(&self) -> &'static str;

    /// The tags the step may be selected by
    fn tags(&self) -> &'static [&'static str];

    /// Run the step.
    ///
    /// Returns `true` if the step should be recorded as completed, in which
    /// case it is skipped on subsequent runs.
    fn run(&self, ctx: &DeployContext) -> Result<bool, ScriptError>;
}

/// Everything a step needs from the environment
pub struct DeployContext {
    /// The registry of previous deployments
    pub deployments: Box<dyn DeploymentRegistry>,
    /// The named accounts and their signers
    pub accounts: Accounts,
    /// The RPC URL of the target chain
    pub rpc_url: Url,
}

impl DeployContext {
    /// A provider signing with the given signer
    pub fn signer_provider(&self, signer: &PrivateKeySigner) -> DynProvider {
        setup_client(signer, &self.rpc_url)
    }
}

/// All registered steps, in execution order
pub fn all_steps() -> Vec<Box<dyn DeployStep>> {
    vec![Box::new(StkAaveUpgrade)]
}
