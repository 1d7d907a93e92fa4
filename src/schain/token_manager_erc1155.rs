//! ERC1155 token manager wrapper.
//!
//! Single and batch shapes are dispatched from the [`TokenValue`] tag to the
//! corresponding contract method; mismatched shapes are unrepresentable.

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
use crate::traits::{CloneResolvable, RoleGrantable};
use crate::types::{schain_hash, Role, SubmissionOptions, TokenValue, TransactionIntent};

/// Wrapper for the `TokenManagerERC1155` contract.
pub struct TokenManagerErc1155 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl TokenManagerErc1155 {
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

    /// Approve this token manager as an operator for all of the sender's
    /// tokens in a clone collection.
    pub async fn approve_all(
        &self,
        clone_token: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::ERC1155::setApprovalForAllCall {
            operator: self.address,
            approved: true,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(clone_token, data.into()), options)
            .await
    }

    /// Burn clone tokens to release the originals on the main chain,
    /// single or batch.
    pub async fn exit_to_main(
        &self,
        origin_token: Address,
        value: &TokenValue,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = match value {
            TokenValue::Single { id, amount } => {
                contracts::TokenManagerERC1155::exitToMainERC1155Call {
                    contractOnMainnet: origin_token,
                    id: *id,
                    amount: *amount,
                }
                .abi_encode()
            }
            TokenValue::Batch { ids, amounts } => {
                contracts::TokenManagerERC1155::exitToMainERC1155BatchCall {
                    contractOnMainnet: origin_token,
                    ids: ids.clone(),
                    amounts: amounts.clone(),
                }
                .abi_encode()
            }
        };

        info!(origin = %origin_token, pairs = value.len(), "Exiting ERC1155 to main chain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Move clone tokens to another schain, single or batch.
    pub async fn transfer_to_schain(
        &self,
        target_schain: &str,
        origin_token: Address,
        value: &TokenValue,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = match value {
            TokenValue::Single { id, amount } => {
                contracts::TokenManagerERC1155::transferToSchainERC1155Call {
                    targetSchainName: target_schain.to_string(),
                    contractOnMainnet: origin_token,
                    id: *id,
                    amount: *amount,
                }
                .abi_encode()
            }
            TokenValue::Batch { ids, amounts } => {
                contracts::TokenManagerERC1155::transferToSchainERC1155BatchCall {
                    targetSchainName: target_schain.to_string(),
                    contractOnMainnet: origin_token,
                    ids: ids.clone(),
                    amounts: amounts.clone(),
                }
                .abi_encode()
            }
        };
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
        let data = contracts::TokenManagerERC1155::addERC1155TokenByOwnerCall {
            originChainName: origin_chain.to_string(),
            erc1155OnMainChain: origin_token,
            erc1155OnSchain: clone_token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether clones deploy automatically on first transfer.
    pub async fn automatic_deploy(&self) -> Result<bool> {
        let result = contracts::TokenManagerERC1155::new(self.address, &*self.provider)
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
        let data = contracts::TokenManagerERC1155::enableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Disable automatic clone deployment.
    pub async fn disable_automatic_deploy(
        &self,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC1155::disableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Clone balances for every id carried by `value`, in order. A single
    /// value yields a one-element vector so single and batch waits compare
    /// alike.
    pub async fn balances(
        &self,
        clone_token: Address,
        account: Address,
        value: &TokenValue,
    ) -> Result<Vec<U256>> {
        let instance = contracts::ERC1155::new(clone_token, &*self.provider);
        match value {
            TokenValue::Single { id, .. } => {
                let result = instance.balanceOf(account, *id).call().await?;
                Ok(vec![result._0])
            }
            TokenValue::Batch { ids, .. } => {
                let accounts = vec![account; ids.len()];
                let result = instance.balanceOfBatch(accounts, ids.clone()).call().await?;
                Ok(result._0)
            }
        }
    }

    /// Wait for any of the id balances to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_balance_change(
        &self,
        clone_token: Address,
        account: Address,
        value: &TokenValue,
        before: Vec<U256>,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.balances(clone_token, account, value)).await
    }
}

#[async_trait]
impl CloneResolvable for TokenManagerErc1155 {
    async fn token_clone_address(
        &self,
        origin_token: Address,
        origin_chain: &str,
    ) -> Result<Address> {
        let result = contracts::TokenManagerERC1155::new(self.address, &*self.provider)
            .clonesErc1155(schain_hash(origin_chain), origin_token)
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
            &format!("ERC1155 clone of {origin_token} from {origin_chain}"),
            &Address::ZERO,
            || self.token_clone_address(origin_token, origin_chain),
        )
        .await
    }
}

#[async_trait]
impl RoleGrantable for TokenManagerErc1155 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC1155::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::TokenManagerERC1155::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
