//! Wrapped-coin token manager wrapper.
//!
//! Native coin deposited on the main chain arrives on the schain as a
//! wrapped ERC20 clone; `exit_to_main` burns it to release the escrow.

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

/// Wrapper for the `TokenManagerEth` contract.
pub struct TokenManagerEth {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl TokenManagerEth {
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

    /// Burn wrapped coin to release the escrowed coin on the main chain.
    pub async fn exit_to_main(
        &self,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerEth::exitToMainCall { amount }.abi_encode();

        info!(amount = %amount, "Exiting wrapped coin to main chain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Address of the wrapped-coin ERC20 clone on this schain.
    pub async fn eth_erc20_address(&self) -> Result<Address> {
        let result = contracts::TokenManagerEth::new(self.address, &*self.provider)
            .ethErc20()
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wrapped-coin balance of an account.
    pub async fn eth_erc20_balance(&self, account: Address) -> Result<U256> {
        let clone = self.eth_erc20_address().await?;
        let result = contracts::ERC20::new(clone, &*self.provider)
            .balanceOf(account)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for an account's wrapped-coin balance to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_eth_erc20_balance_change(
        &self,
        account: Address,
        before: U256,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.eth_erc20_balance(account)).await
    }
}

#[async_trait]
impl RoleGrantable for TokenManagerEth {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerEth::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::TokenManagerEth::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
