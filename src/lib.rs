//! IMA Client: SDK for the Interchain Messaging Agreement Bridge
//!
//! This crate provides a typed client for moving value between a main chain
//! and SKALE-style schains through the IMA contracts:
//!
//! - **Chain Handles** - [`MainnetChain`] / [`SchainChain`] bundle a provider with all contract wrappers
//! - **Deposit Boxes** - main-chain escrows for native coin, ERC20, ERC721 and ERC1155
//! - **Token Managers** - schain-side clone management and exits back to the main chain
//! - **Transaction Submission** - local or node-delegated signing with revert classification
//! - **Change Polling** - wait for bridged balances, owners, or clone deployments to appear
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! ima-client = { path = "../ima-client" }
//! ```
//!
//! Connect each chain from its deployment registry, then drive the flow with
//! the wrapper methods:
//!
//! ```ignore
//! let registry = DeploymentRegistry::load("mainnet.json")?;
//! let mainnet = MainnetChain::new("http://localhost:8545", &registry)?;
//! let opts = SubmissionOptions::with_key(address, private_key);
//! mainnet.eth.deposit("my-schain", amount, &opts).await?;
//! ```

pub mod abi;
pub mod chain;
pub mod client;
pub mod contracts;
pub mod error;
pub mod keys;
pub mod mainnet;
pub mod poll;
pub mod redact;
pub mod schain;
pub mod submit;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate root
pub use abi::DeploymentRegistry;
pub use chain::{MainnetChain, SchainChain};
pub use client::{connect_http, HttpProvider};
pub use error::{Error, Result};
pub use poll::{wait_or_fail, wait_or_timeout, PollSpec};
pub use submit::TxSubmitter;
pub use traits::{Approvable, CloneResolvable, RoleGrantable};
pub use types::{schain_hash, Role, SubmissionOptions, TokenValue, TransactionIntent};
