//! Community pool wrapper.
//!
//! The community pool holds per-user prepaid balances used to reimburse the
//! gas spent delivering exit messages on the main chain. A user must be
//! recharged for a schain before exits from that schain can complete.

use std::sync::Arc;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use tracing::info;

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;
use crate::poll::{wait_or_timeout, PollSpec};
use crate::submit::TxSubmitter;
use crate::types::{SubmissionOptions, TransactionIntent};

/// Wrapper for the `CommunityPool` contract.
pub struct CommunityPool {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl CommunityPool {
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

    /// Prepay exit gas for a user on a schain. The amount is
    /// `options.value`.
    pub async fn recharge_user_wallet(
        &self,
        schain_name: &str,
        user: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::CommunityPool::rechargeUserWalletCall {
            schainName: schain_name.to_string(),
            user,
        }
        .abi_encode();

        info!(schain = %schain_name, user = %user, value = ?options.value, "Recharging user wallet");
        self.submitter
            .submit(
                &TransactionIntent::with_value(self.address, data.into(), options.value),
                options,
            )
            .await
    }

    /// Withdraw unspent prepaid gas back to the sender.
    pub async fn withdraw_funds(
        &self,
        schain_name: &str,
        amount: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::CommunityPool::withdrawFundsCall {
            schainName: schain_name.to_string(),
            amount,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Current prepaid balance for a user on a schain.
    pub async fn balance(&self, user: Address, schain_name: &str) -> Result<U256> {
        let result = contracts::CommunityPool::new(self.address, &*self.provider)
            .getBalance(user, schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }

    /// Minimum gas the pool reimburses per exit message.
    pub async fn min_transaction_gas(&self) -> Result<U256> {
        let result = contracts::CommunityPool::new(self.address, &*self.provider)
            .minTransactionGas()
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for a user's prepaid balance to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_balance_change(
        &self,
        user: Address,
        schain_name: &str,
        before: U256,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || self.balance(user, schain_name)).await
    }
}
