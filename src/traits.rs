//! Capability Traits
//!
//! The mainnet and schain wrappers share method names (`grant_role`,
//! `approve`, `token_clone_address`) without sharing a base type. Each
//! behavior is a capability trait; a concrete wrapper implements only the
//! capabilities its contract supports.

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
};
use async_trait::async_trait;

use crate::error::Result;
use crate::poll::PollSpec;
use crate::types::{Role, SubmissionOptions};

/// AccessControl role administration.
#[async_trait]
pub trait RoleGrantable {
    /// Grant a role to an account (sender must hold the role's admin role).
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt>;

    /// Whether an account holds a role.
    async fn has_role(&self, role: Role, account: Address) -> Result<bool>;
}

/// ERC20-style spend approval towards the wrapper's contract.
#[async_trait]
pub trait Approvable {
    /// Approve the wrapper's contract to spend `amount` of `token`.
    async fn approve(
        &self,
        token: Address,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt>;
}

/// Token clone address resolution on a schain token manager.
#[async_trait]
pub trait CloneResolvable {
    /// Resolve the clone deployed for an origin token; zero address if the
    /// clone does not exist yet.
    async fn token_clone_address(
        &self,
        origin_token: Address,
        origin_chain: &str,
    ) -> Result<Address>;

    /// Poll until the clone address is assigned, failing with a timeout
    /// diagnostic naming the origin token and chain.
    async fn wait_token_clone(
        &self,
        origin_token: Address,
        origin_chain: &str,
        spec: &PollSpec,
    ) -> Result<Address>;
}
