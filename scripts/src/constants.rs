//! Constants used in the deploy steps

/// The deployment name under which the StakedAave proxy is recorded
pub const STAKE_AAVE_PROXY: &str = "StakeAave-Proxy";

/// The named account used to author deployment transactions
pub const DEPLOYER_ACCOUNT: &str = "deployer";

/// The tag shared by every step of the full GHO deployment
pub const FULL_GHO_DEPLOY_TAG: &str = "full_gho_deploy";

/// The key under which a flat `deployments.json` may nest its addresses
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The extension of a deployment record in a hardhat-deploy network directory
pub const DEPLOYMENT_FILE_EXTENSION: &str = "json";

/// The file recording the chain ID of a hardhat-deploy network directory
pub const CHAIN_ID_FILE: &str = ".chainId";

/// The file recording which step IDs have already completed
pub const MIGRATIONS_FILE: &str = ".migrations.json";

/// The default RPC URL, that of a local Anvil / Hardhat node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default named account mapping
pub const DEFAULT_NAMED_ACCOUNT: &str = "deployer=0";

/// The separator between a named account and its signer index
pub const NAMED_ACCOUNT_SEPARATOR: char = '=';
