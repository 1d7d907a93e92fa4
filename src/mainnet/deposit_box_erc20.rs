//! ERC20 deposit box wrapper.

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
use crate::traits::{Approvable, RoleGrantable};
use crate::types::{Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `DepositBoxERC20` contract.
pub struct DepositBoxErc20 {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl DepositBoxErc20 {
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

    /// Deposit ERC20 tokens towards a schain (requires prior [`approve`]).
    ///
    /// [`approve`]: Approvable::approve
    pub async fn deposit(
        &self,
        schain_name: &str,
        token: Address,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC20::depositERC20Call {
            schainName: schain_name.to_string(),
            erc20OnMainnet: token,
            amount,
        }
        .abi_encode();

        info!(schain = %schain_name, token = %token, amount = %amount, "Depositing ERC20");
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
        let data = contracts::DepositBoxERC20::addERC20TokenByOwnerCall {
            schainName: schain_name.to_string(),
            erc20OnMainnet: token,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether a token is whitelisted for a schain.
    pub async fn is_token_added(&self, schain_name: &str, token: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC20::new(self.address, &*self.provider)
            .getSchainToERC20(schain_name.to_string(), token)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Number of whitelisted tokens for a schain.
    pub async fn tokens_added_length(&self, schain_name: &str) -> Result<U256> {
        let result = contracts::DepositBoxERC20::new(self.address, &*self.provider)
            .getSchainToAllERC20Length(schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }

    /// Page through whitelisted tokens for a schain.
    pub async fn tokens_added(
        &self,
        schain_name: &str,
        from: U256,
        to: U256,
    ) -> Result<Vec<Address>> {
        let result = contracts::DepositBoxERC20::new(self.address, &*self.provider)
            .getSchainToAllERC20(schain_name.to_string(), from, to)
            .call()
            .await?;
        Ok(result._0)
    }

    /// ERC20 balance of an account on the main chain.
    pub async fn erc20_balance(&self, token: Address, account: Address) -> Result<U256> {
        let result = contracts::ERC20::new(token, &*self.provider)
            .balanceOf(account)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Allowance granted by an owner to this deposit box.
    pub async fn allowance(&self, token: Address, owner: Address) -> Result<U256> {
        let result = contracts::ERC20::new(token, &*self.provider)
            .allowance(owner, self.address)
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for an account's ERC20 balance to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_erc20_balance_change(
        &self,
        token: Address,
        account: Address,
        before: U256,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.erc20_balance(token, account)).await
    }
}

#[async_trait]
impl Approvable for DepositBoxErc20 {
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
impl RoleGrantable for DepositBoxErc20 {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxERC20::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::DepositBoxERC20::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
