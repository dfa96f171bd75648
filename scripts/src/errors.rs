//! Definitions of errors that can occur during the execution of the deploy steps

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy steps
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading or parsing the deployments registry
    ReadDeployments(String),
    /// The named deployment is not present in the registry
    DeploymentNotFound(String),
    /// Error reading the migrations file
    ReadMigrations(String),
    /// Error writing the migrations file
    WriteMigrations(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error resolving a named account or signer
    AccountResolution(String),
    /// The registry was recorded against a different chain than the RPC serves
    ChainMismatch(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::DeploymentNotFound(s) => write!(f, "no deployment found for: {}", s),
            ScriptError::ReadMigrations(s) => write!(f, "error reading migrations: {}", s),
            ScriptError::WriteMigrations(s) => write!(f, "error writing migrations: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::AccountResolution(s) => write!(f, "error resolving account: {}", s),
            ScriptError::ChainMismatch(s) => write!(f, "chain mismatch: {}", s),
        }
    }
}

impl Error for ScriptError {}
