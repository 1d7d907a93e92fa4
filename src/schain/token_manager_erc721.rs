//! ERC721 token manager wrapper.

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
use crate::types::{schain_hash, Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `TokenManagerERC721` contract.
pub struct TokenManagerErc721 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl TokenManagerErc721 {
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

    /// Approve this token manager to take one clone token.
    pub async fn approve(
        &self,
        clone_token: Address,
        token_id: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::ERC721::approveCall {
            to: self.address,
            tokenId: token_id,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(clone_token, data.into()), options)
            .await
    }

    /// Burn a clone token to release the original on the main chain.
    pub async fn exit_to_main(
        &self,
        origin_token: Address,
        token_id: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC721::exitToMainERC721Call {
            contractOnMainnet: origin_token,
            tokenId: token_id,
        }
        .abi_encode();

        info!(origin = %origin_token, token_id = %token_id, "Exiting ERC721 to main chain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Move a clone token to another schain.
    pub async fn transfer_to_schain(
        &self,
        target_schain: &str,
        origin_token: Address,
        token_id: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC721::transferToSchainERC721Call {
            targetSchainName: target_schain.to_string(),
            contractOnMainnet: origin_token,
            tokenId: token_id,
        }
        .abi_encode();
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
        let data = contracts::TokenManagerERC721::addERC721TokenByOwnerCall {
            originChainName: origin_chain.to_string(),
            erc721OnMainChain: origin_token,
            erc721OnSchain: clone_token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether clones deploy automatically on first transfer.
    pub async fn automatic_deploy(&self) -> Result<bool> {
        let result = contracts::TokenManagerERC721::new(self.address, &*self.provider)
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
        let data = contracts::TokenManagerERC721::enableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Disable automatic clone deployment.
    pub async fn disable_automatic_deploy(
        &self,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC721::disableAutomaticDeployCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Current owner of a clone token on this schain.
    pub async fn owner_of(&self, clone_token: Address, token_id: U256) -> Result<Address> {
        let result = contracts::ERC721::new(clone_token, &*self.provider)
            .ownerOf(token_id)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for a clone token's owner to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_owner_change(
        &self,
        clone_token: Address,
        token_id: U256,
        before: Address,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.owner_of(clone_token, token_id)).await
    }
}

#[async_trait]
impl CloneResolvable for TokenManagerErc721 {
    async fn token_clone_address(
        &self,
        origin_token: Address,
        origin_chain: &str,
    ) -> Result<Address> {
        let result = contracts::TokenManagerERC721::new(self.address, &*self.provider)
            .clonesErc721(schain_hash(origin_chain), origin_token)
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
            &format!("ERC721 clone of {origin_token} from {origin_chain}"),
            &Address::ZERO,
            || self.token_clone_address(origin_token, origin_chain),
        )
        .await
    }
}

#[async_trait]
impl RoleGrantable for TokenManagerErc721 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerERC721::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::TokenManagerERC721::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
