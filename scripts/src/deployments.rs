//! Readers for the deployment registry, the record of addresses produced by
//! earlier steps of the pipeline
//!
//! Two on-disk layouts are supported: a hardhat-deploy network directory,
//! holding one `<name>.json` file per deployment, and a flat
//! `deployments.json` mapping names directly to addresses.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::{Address, TxHash};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    constants::{CHAIN_ID_FILE, DEPLOYMENTS_KEY, DEPLOYMENT_FILE_EXTENSION},
    errors::ScriptError,
};

/// A single deployment recorded in the registry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    /// The address at which the contract lives
    pub address: Address,
    /// The implementation behind the address, if it is a proxy
    pub implementation: Option<Address>,
    /// The hash of the deploying transaction, if recorded
    pub transaction_hash: Option<TxHash>,
}

impl Deployment {
    /// A deployment known only by its address
    pub fn at(address: Address) -> Self {
        Self { address, implementation: None, transaction_hash: None }
    }
}

/// Read access to the deployments produced by earlier steps
pub trait DeploymentRegistry {
    /// Look up the deployment recorded under `name`
    fn get(&self, name: &str) -> Result<Deployment, ScriptError>;

    /// The chain ID the registry was recorded against, if known
    fn chain_id(&self) -> Result<Option<u64>, ScriptError> {
        Ok(None)
    }
}

/// Open the registry at `path`, a hardhat-deploy network directory or a
/// flat JSON file
pub fn open_registry(path: &Path) -> Result<Box<dyn DeploymentRegistry>, ScriptError> {
    if path.is_dir() {
        Ok(Box::new(HardhatDeployments::new(path)))
    } else if path.is_file() {
        Ok(Box::new(JsonDeployments::load(path)?))
    } else {
        Err(ScriptError::ReadDeployments(format!(
            "no deployments found at {}",
            path.display()
        )))
    }
}

/// Parse an address string as stored in a deployment record
fn parse_address(addr_str: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr_str).map_err(|e| {
        ScriptError::ReadDeployments(format!("failed to parse address {}: {}", addr_str, e))
    })
}

/// Parse a transaction hash as stored in a deployment record
fn parse_tx_hash(hash_str: &str) -> Result<TxHash, ScriptError> {
    TxHash::from_str(hash_str).map_err(|e| {
        ScriptError::ReadDeployments(format!("failed to parse tx hash {}: {}", hash_str, e))
    })
}

// -----------------------
// | Hardhat Deployments |
// -----------------------

/// The fields of a hardhat-deploy deployment file that we consume
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentFile {
    /// The deployed address
    address: String,
    /// The implementation address, present for proxied deployments
    #[serde(default)]
    implementation: Option<String>,
    /// The deploying transaction hash
    #[serde(default)]
    transaction_hash: Option<String>,
}

/// A hardhat-deploy network directory, e.g. `deployments/sepolia`
pub struct HardhatDeployments {
    /// The network directory
    dir: PathBuf,
}

impl HardhatDeployments {
    /// Create a registry over the given network directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path of the record for the given deployment
    fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, DEPLOYMENT_FILE_EXTENSION))
    }
}

impl DeploymentRegistry for HardhatDeployments {
    fn get(&self, name: &str) -> Result<Deployment, ScriptError> {
        let path = self.record_path(name);
        if !path.is_file() {
            return Err(ScriptError::DeploymentNotFound(name.to_string()));
        }
        debug!("reading deployment {} from {}", name, path.display());

        let content = fs::read_to_string(&path).map_err(|e| {
            ScriptError::ReadDeployments(format!("failed to read {}: {}", path.display(), e))
        })?;
        let file: DeploymentFile = serde_json::from_str(&content).map_err(|e| {
            ScriptError::ReadDeployments(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Deployment {
            address: parse_address(&file.address)?,
            implementation: file.implementation.as_deref().map(parse_address).transpose()?,
            transaction_hash: file.transaction_hash.as_deref().map(parse_tx_hash).transpose()?,
        })
    }

    fn chain_id(&self) -> Result<Option<u64>, ScriptError> {
        let path = self.dir.join(CHAIN_ID_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
        content
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ScriptError::ReadDeployments(format!("invalid chain ID: {}", e)))
    }
}

// --------------------
// | Flat Deployments |
// --------------------

/// A flat `deployments.json` file mapping names to addresses
pub struct JsonDeployments {
    /// The parsed name -> address mapping
    addresses: HashMap<String, Address>,
}

impl JsonDeployments {
    /// Load the mapping from the given file
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScriptError::ReadDeployments(format!(
                "failed to read deployments file at {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content)
    }

    /// Parse the mapping from a JSON string
    ///
    /// Addresses may sit at the top level or be nested under a
    /// `"deployments"` key; non-string entries are ignored
    pub fn from_json_str(content: &str) -> Result<Self, ScriptError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
        let entries = json.get(DEPLOYMENTS_KEY).unwrap_or(&json).as_object().ok_or_else(|| {
            ScriptError::ReadDeployments("deployments file is not a JSON object".to_string())
        })?;

        let mut addresses = HashMap::new();
        for (name, value) in entries {
            if let Some(addr_str) = value.as_str() {
                addresses.insert(name.clone(), parse_address(addr_str)?);
            }
        }

        Ok(Self { addresses })
    }
}

impl DeploymentRegistry for JsonDeployments {
    fn get(&self, name: &str) -> Result<Deployment, ScriptError> {
        self.addresses
            .get(name)
            .copied()
            .map(Deployment::at)
            .ok_or_else(|| ScriptError::DeploymentNotFound(name.to_string()))
    }
}

// ----------------------
// | In-Memory Registry |
// ----------------------

/// A registry held entirely in memory
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryDeployments {
    /// The recorded deployments
    deployments: HashMap<String, Deployment>,
    /// The chain ID, if set
    chain_id: Option<u64>,
}

#[cfg(test)]
impl InMemoryDeployments {
    /// Record a deployment under the given name
    pub fn with(mut self, name: &str, deployment: Deployment) -> Self {
        self.deployments.insert(name.to_string(), deployment);
        self
    }

    /// Set the chain ID the registry reports
    pub fn on_chain(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

#[cfg(test)]
impl DeploymentRegistry for InMemoryDeployments {
    fn get(&self, name: &str) -> Result<Deployment, ScriptError> {
        self.deployments
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::DeploymentNotFound(name.to_string()))
    }

    fn chain_id(&self) -> Result<Option<u64>, ScriptError> {
        Ok(self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::{address, b256};

    use super::*;
    use crate::constants::STAKE_AAVE_PROXY;

    /// The proxy address used throughout the tests
    const PROXY: Address = address!("4da27a545c0c5B758a6BA100e3a049001de870f5");

    #[test]
    fn test_hardhat_registry_reads_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("StakeAave-Proxy.json"),
            r#"{
                "address": "0x4da27a545c0c5B758a6BA100e3a049001de870f5",
                "implementation": "0x0000000000000000000000000000000000000001",
                "transactionHash": "0x6d1a1f4bb1c3f2d1f8b87b0f39f8b1e9a3f0b5f9e6a4d4b1c2a3e4f5a6b7c8d9",
                "abi": []
            }"#,
        )
        .unwrap();

        let registry = HardhatDeployments::new(dir.path());
        let deployment = registry.get(STAKE_AAVE_PROXY).unwrap();

        assert_eq!(deployment.address, PROXY);
        assert_eq!(deployment.implementation, Some(Address::with_last_byte(1)));
        assert_eq!(
            deployment.transaction_hash,
            Some(b256!("6d1a1f4bb1c3f2d1f8b87b0f39f8b1e9a3f0b5f9e6a4d4b1c2a3e4f5a6b7c8d9"))
        );
    }

    #[test]
    fn test_hardhat_registry_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let registry = HardhatDeployments::new(dir.path());

        let err = registry.get(STAKE_AAVE_PROXY).unwrap_err();
        assert!(matches!(err, ScriptError::DeploymentNotFound(name) if name == STAKE_AAVE_PROXY));
    }

    #[test]
    fn test_hardhat_registry_malformed_address() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("StakeAave-Proxy.json"), r#"{"address": "0x1234"}"#).unwrap();

        let registry = HardhatDeployments::new(dir.path());
        assert!(matches!(registry.get(STAKE_AAVE_PROXY), Err(ScriptError::ReadDeployments(_))));
    }

    #[test]
    fn test_hardhat_registry_malformed_tx_hash() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("StakeAave-Proxy.json"),
            r#"{"address": "0x4da27a545c0c5B758a6BA100e3a049001de870f5", "transactionHash": "0xabc"}"#,
        )
        .unwrap();

        let registry = HardhatDeployments::new(dir.path());
        assert!(matches!(registry.get(STAKE_AAVE_PROXY), Err(ScriptError::ReadDeployments(_))));
    }

    #[test]
    fn test_hardhat_registry_chain_id() {
        let dir = tempfile::tempdir().unwrap();
        let registry = HardhatDeployments::new(dir.path());
        assert_eq!(registry.chain_id().unwrap(), None);

        fs::write(dir.path().join(CHAIN_ID_FILE), "11155111\n").unwrap();
        assert_eq!(registry.chain_id().unwrap(), Some(11155111));
    }

    #[test]
    fn test_flat_registry_nested_and_top_level() {
        let nested = JsonDeployments::from_json_str(
            r#"{"deployments": {"StakeAave-Proxy": "0x4da27a545c0c5B758a6BA100e3a049001de870f5"}}"#,
        )
        .unwrap();
        assert_eq!(nested.get(STAKE_AAVE_PROXY).unwrap().address, PROXY);

        let flat = JsonDeployments::from_json_str(
            r#"{"StakeAave-Proxy": "0x4da27a545c0c5B758a6BA100e3a049001de870f5", "count": 3}"#,
        )
        .unwrap();
        assert_eq!(flat.get(STAKE_AAVE_PROXY).unwrap(), Deployment::at(PROXY));
        assert!(matches!(flat.get("count"), Err(ScriptError::DeploymentNotFound(_))));
    }

    #[test]
    fn test_open_registry_picks_layout() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("deployments.json");
        fs::write(&file, r#"{"StakeAave-Proxy": "0x4da27a545c0c5B758a6BA100e3a049001de870f5"}"#)
            .unwrap();

        let from_file = open_registry(&file).unwrap();
        assert_eq!(from_file.get(STAKE_AAVE_PROXY).unwrap().address, PROXY);

        // The directory holds no `<name>.json` record for the proxy
        let from_dir = open_registry(dir.path()).unwrap();
        assert!(from_dir.get(STAKE_AAVE_PROXY).is_err());

        assert!(open_registry(&dir.path().join("missing")).is_err());
    }
}
