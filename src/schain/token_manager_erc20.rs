//! ERC20 token manager wrapper.

use std::sync::Arc;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use async_trait::async_trait;
use tracing::info;

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;
use crate::poll::{wait_or_fail, wait_or_timeout, PollSpec};
use crate::submit::TxSubmitter;
use crate::traits::{Approvable, CloneResolvable, RoleGrantable};
use crate::types::{schain_hash, Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `TokenManagerERC20` contract.
pub struct TokenManagerErc20 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl TokenManagerErc20 {
    pub fn new(address: Address, provider: Arc<HttpProvider>) -> Self {
        Self {
            address,
            submitter: TxSubmitter::new(provider.clone()),
            provider,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Burn clone tokens to release the originals on the main chain
    /// (requires prior [`approve`] on the clone).
    ///
    /// [`approve`]: Approvable::approve
    pub async fn exit_to_main(
        &self,
        origin_token: Address,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::exitToMainERC20Call {
            contractOnMainnet: origin_token,
            amount,
        }
        .abi_encode();

        info!(origin = %origin_token, amount = %amount, "Exiting ERC20 to main chain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Move clone tokens to another schain.
    pub async fn transfer_to_schain(
        &self,
        target_schain: &str,
        origin_token: Address,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::transferToSchainERC20Call {
            targetSchainName: target_schain.to_string(),
            contractOnMainnet: origin_token,
            amount,
        }
        .abi_encode();

        info!(target = %target_schain, origin = %origin_token, amount = %amount, "Transferring ERC20 to schain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Register an origin-token to clone mapping (schain owner only).
    pub async fn add_token_by_owner(
        &self,
        origin_chain: &str,
        origin_token: Address,
        clone_token: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::addERC20TokenByOwnerCall {
            originChainName: origin_chain.to_string(),
            erc20OnMainChain: origin_token,
            erc20OnSchain: clone_token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether clones deploy automatically on first transfer.
    pub async fn automatic_deploy(&self) -> Result<bool> {
        let result = contracts::TokenManagerERC20::new(self.address, &*self.provider)
            .automaticDeploy()
            .call()
            .await?;
        Ok(result._0)
    }

    /// Enable automatic clone deployment (requires the deploy role).
    pub async fn enable_automatic_deploy(
        &self,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::enableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Disable automatic clone deployment.
    pub async fn disable_automatic_deploy(
        &self,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::disableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Clone-token balance of an account on this schain.
    pub async fn erc20_balance(&self, clone_token: Address, account: Address) -> Result<U256> {
        let result = contracts::ERC20::new(clone_token, &*self.provider)
            .balanceOf(account)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for an account's clone-token balance to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_erc20_balance_change(
        &self,
        clone_token: Address,
        account: Address,
        before: U256,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.erc20_balance(clone_token, account)).await
    }
}

#[async_trait]
impl Approvable for TokenManagerErc20 {
    async fn approve(
        &self,
        token: Address,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::ERC20::approveCall {
            spender: self.address,
            amount,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(token, data.into()), options)
            .await
    }
}

#[async_trait]
impl CloneResolvable for TokenManagerErc20 {
    async fn token_clone_address(
        &self,
        origin_token: Address,
        origin_chain: &str,
    ) -> Result<Address> {
        let result = contracts::TokenManagerERC20::new(self.address, &*self.provider)
            .clonesErc20(schain_hash(origin_chain), origin_token)
            .call()
            .await?;
        Ok(result._0)
    }

    async fn wait_token_clone(
        &self,
        origin_token: Address,
        origin_chain: &str,
        spec: &PollSpec,
    ) -> Result<Address> {
        wait_or_fail(
            spec,
            &format!("ERC20 clone of {origin_token} from {origin_chain}"),
            &Address::ZERO,
            || self.token_clone_address(origin_token, origin_chain),
        )
        .await
    }
}

#[async_trait]
impl RoleGrantable for TokenManagerErc20 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC20::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::TokenManagerERC20::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
