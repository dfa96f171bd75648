//! Connects to the StakedAave proxy ahead of its upgrade to
//! `StakedTokenV2Rev3`

use tracing::{debug, info};

use super::{DeployContext, DeployStep};
use crate::{
    constants::{DEPLOYER_ACCOUNT, FULL_GHO_DEPLOY_TAG, STAKE_AAVE_PROXY},
    errors::ScriptError,
    solidity::{IStakedTokenV2Rev3, StakedTokenV2Rev3},
};

/// The step binding a `StakedTokenV2Rev3` handle to the StakedAave proxy
pub struct StkAaveUpgrade;

impl StkAaveUpgrade {
    /// Bind a handle to the recorded proxy, signed by the first signer
    pub fn connect(&self, ctx: &DeployContext) -> Result<StakedTokenV2Rev3, ScriptError> {
        let deployer = ctx.accounts.named_account(DEPLOYER_ACCOUNT)?;
        let signer = ctx.accounts.first_signer()?;

        let proxy = ctx.deployments.get(STAKE_AAVE_PROXY)?;
        info!("connecting to {} at {:#x} as {:#x}", STAKE_AAVE_PROXY, proxy.address, deployer);
        if let Some(implementation) = proxy.implementation {
            debug!("current implementation at {:#x}", implementation);
        }
        if let Some(tx_hash) = proxy.transaction_hash {
            debug!("proxy deployed in {:#x}", tx_hash);
        }

        Ok(IStakedTokenV2Rev3::new(proxy.address, ctx.signer_provider(signer)))
    }
}

impl DeployStep for StkAaveUpgrade {
    fn id(&self) -> &'static str {
        "StkAaveUpgrade"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["StkAaveUpgrade", FULL_GHO_DEPLOY_TAG]
    }

    fn run(&self, ctx: &DeployContext) -> Result<bool, ScriptError> {
        let _instance = self.connect(ctx)?;
        Ok(false)
    }
}
