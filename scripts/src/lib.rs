//! Deploy steps for the GHO contracts, run as a tagged pipeline over a
//! registry of earlier deployments.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod accounts;
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub mod cli;
mod commands;
pub mod constants;
pub mod deployments;
pub mod errors;
pub mod runner;
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub mod solidity;
pub mod steps;
pub mod utils;
