//! Named accounts and the signers backing them

use std::{collections::HashMap, str::FromStr};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::{constants::NAMED_ACCOUNT_SEPARATOR, errors::ScriptError};

/// A mapping from account names (e.g. `deployer`) to indices into the
/// signer list
#[derive(Clone, Debug, Default)]
pub struct NamedAccounts(HashMap<String, usize>);

impl NamedAccounts {
    /// Parse `name=index` entries
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, ScriptError> {
        let mut accounts = HashMap::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (name, index) = entry.split_once(NAMED_ACCOUNT_SEPARATOR).ok_or_else(|| {
                ScriptError::AccountResolution(format!("expected `name=index`, got `{}`", entry))
            })?;
            let index = index
                .trim()
                .parse::<usize>()
                .map_err(|e| ScriptError::AccountResolution(format!("{}: {}", entry, e)))?;

            let name = name.trim();
            if accounts.insert(name.to_string(), index).is_some() {
                return Err(ScriptError::AccountResolution(format!(
                    "account `{}` is named more than once",
                    name
                )));
            }
        }

        Ok(Self(accounts))
    }

    /// The signer index of the given account, if named
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }
}

/// The signers available to the pipeline, along with their names
pub struct Accounts {
    /// The name -> signer index mapping
    named: NamedAccounts,
    /// The ordered signer list
    signers: Vec<PrivateKeySigner>,
}

impl Accounts {
    /// Create the accounts from already-parsed signers
    pub fn new(named: NamedAccounts, signers: Vec<PrivateKeySigner>) -> Self {
        Self { named, signers }
    }

    /// Create the accounts from hex-encoded private keys
    pub fn from_private_keys<S: AsRef<str>>(
        named: NamedAccounts,
        priv_keys: &[S],
    ) -> Result<Self, ScriptError> {
        let signers = priv_keys
            .iter()
            .map(|key| {
                PrivateKeySigner::from_str(key.as_ref())
                    .map_err(|e| ScriptError::AccountResolution(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(named, signers))
    }

    /// The address of the named account
    pub fn named_account(&self, name: &str) -> Result<Address, ScriptError> {
        let index = self.named.index_of(name).ok_or_else(|| {
            ScriptError::AccountResolution(format!("no account named `{}`", name))
        })?;

        self.signers.get(index).map(|signer| signer.address()).ok_or_else(|| {
            ScriptError::AccountResolution(format!(
                "account `{}` refers to signer {}, but only {} are configured",
                name,
                index,
                self.signers.len()
            ))
        })
    }

    /// All configured signers, in order
    pub fn signers(&self) -> &[PrivateKeySigner] {
        &self.signers
    }

    /// The first configured signer
    pub fn first_signer(&self) -> Result<&PrivateKeySigner, ScriptError> {
        self.signers
            .first()
            .ok_or_else(|| ScriptError::AccountResolution("no signers configured".to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloy::primitives::address;

    use super::*;

    /// The first two default Anvil private keys
    pub(crate) const ANVIL_KEYS: [&str; 2] = [
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    ];

    /// The addresses of the first two default Anvil accounts
    const ANVIL_ADDRESSES: [Address; 2] = [
        address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
    ];

    #[test]
    fn test_named_account_resolution() {
        let named = NamedAccounts::parse(&["deployer=0", " treasury = 1 "]).unwrap();
        let accounts = Accounts::from_private_keys(named, &ANVIL_KEYS).unwrap();

        assert_eq!(accounts.named_account("deployer").unwrap(), ANVIL_ADDRESSES[0]);
        assert_eq!(accounts.named_account("treasury").unwrap(), ANVIL_ADDRESSES[1]);
        assert_eq!(accounts.first_signer().unwrap().address(), ANVIL_ADDRESSES[0]);
        assert_eq!(accounts.signers().len(), 2);
    }

    #[test]
    fn test_unknown_and_out_of_range_accounts() {
        let named = NamedAccounts::parse(&["deployer=3"]).unwrap();
        let accounts = Accounts::from_private_keys(named, &ANVIL_KEYS).unwrap();

        assert!(matches!(
            accounts.named_account("deployer"),
            Err(ScriptError::AccountResolution(_))
        ));
        assert!(matches!(accounts.named_account("admin"), Err(ScriptError::AccountResolution(_))));
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(NamedAccounts::parse(&["deployer"]).is_err());
        assert!(NamedAccounts::parse(&["deployer=first"]).is_err());
        assert!(matches!(
            NamedAccounts::parse(&["deployer=0", "deployer=1"]),
            Err(ScriptError::AccountResolution(_))
        ));
        assert!(Accounts::from_private_keys(NamedAccounts::default(), &["0x1234"]).is_err());

        let empty = Accounts::new(NamedAccounts::default(), vec![]);
        assert!(empty.first_signer().is_err());
    }
}
