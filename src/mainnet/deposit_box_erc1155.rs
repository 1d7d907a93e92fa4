//! ERC1155 deposit box wrapper.
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
use crate::poll::{wait_or_timeout, PollSpec};
use crate::submit::TxSubmitter;
use crate::traits::RoleGrantable;
use crate::types::{Role, SubmissionOptions, TokenValue, TransactionIntent};

/// Wrapper for the `DepositBoxERC1155` contract.
pub struct DepositBoxErc1155 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl DepositBoxErc1155 {
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

    /// Approve this deposit box as an operator for all of the sender's
    /// tokens in a collection.
    pub async fn approve_all(
        &self,
        token: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::ERC1155::setApprovalForAllCall {
            operator: self.address,
            approved: true,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(token, data.into()), options)
            .await
    }

    /// Deposit ERC1155 tokens towards a schain, single or batch.
    pub async fn deposit(
        &self,
        schain_name: &str,
        token: Address,
        value: &TokenValue,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = match value {
            TokenValue::Single { id, amount } => contracts::DepositBoxERC1155::depositERC1155Call {
                schainName: schain_name.to_string(),
                erc1155OnMainnet: token,
                id: *id,
                amount: *amount,
            }
            .abi_encode(),
            TokenValue::Batch { ids, amounts } => {
                contracts::DepositBoxERC1155::depositERC1155BatchCall {
                    schainName: schain_name.to_string(),
                    erc1155OnMainnet: token,
                    ids: ids.clone(),
                    amounts: amounts.clone(),
                }
                .abi_encode()
            }
        };

        info!(schain = %schain_name, token = %token, pairs = value.len(), "Depositing ERC1155");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whitelist a main-chain collection for a schain (schain owner only).
    pub async fn add_token_by_owner(
        &self,
        schain_name: &str,
        token: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC1155::addERC1155TokenByOwnerCall {
            schainName: schain_name.to_string(),
            erc1155OnMainnet: token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether a collection is whitelisted for a schain.
    pub async fn is_token_added(&self, schain_name: &str, token: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC1155::new(self.address, &*self.provider)
            .getSchainToERC1155(schain_name.to_string(), token)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Balances for every id carried by `value`, in order. A single value
    /// yields a one-element vector so single and batch waits compare alike.
    pub async fn balances(
        &self,
        token: Address,
        account: Address,
        value: &TokenValue,
    ) -> Result<Vec<U256>> {
        let instance = contracts::ERC1155::new(token, &*self.provider);
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
        token: Address,
        account: Address,
        value: &TokenValue,
        before: Vec<U256>,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.balances(token, account, value)).await
    }
}

#[async_trait]
impl RoleGrantable for DepositBoxErc1155 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC1155::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC1155::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
