//! ERC721 deposit box wrapper.

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
use crate::types::{Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `DepositBoxERC721` contract.
pub struct DepositBoxErc721 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl DepositBoxErc721 {
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

    /// Approve this deposit box to take one token.
    pub async fn approve(
        &self,
        token: Address,
        token_id: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::ERC721::approveCall {
            to: self.address,
            tokenId: token_id,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(token, data.into()), options)
            .await
    }

    /// Deposit an ERC721 token towards a schain (requires prior approval).
    pub async fn deposit(
        &self,
        schain_name: &str,
        token: Address,
        token_id: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC721::depositERC721Call {
            schainName: schain_name.to_string(),
            erc721OnMainnet: token,
            tokenId: token_id,
        }
        .abi_encode();

        info!(schain = %schain_name, token = %token, token_id = %token_id, "Depositing ERC721");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whitelist a main-chain token for a schain (schain owner only).
    pub async fn add_token_by_owner(
        &self,
        schain_name: &str,
        token: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC721::addERC721TokenByOwnerCall {
            schainName: schain_name.to_string(),
            erc721OnMainnet: token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether a token is whitelisted for a schain.
    pub async fn is_token_added(&self, schain_name: &str, token: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC721::new(self.address, &*self.provider)
            .getSchainToERC721(schain_name.to_string(), token)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Current owner of a token.
    pub async fn owner_of(&self, token: Address, token_id: U256) -> Result<Address> {
        let result = contracts::ERC721::new(token, &*self.provider)
            .ownerOf(token_id)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for a token's owner to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_owner_change(
        &self,
        token: Address,
        token_id: U256,
        before: Address,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.owner_of(token, token_id)).await
    }
}

#[async_trait]
impl RoleGrantable for DepositBoxErc721 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC721::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC721::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
