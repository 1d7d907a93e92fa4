//! Native coin deposit box wrapper.

use std::sync::Arc;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use async_trait::async_trait;
use tracing::info;

use crate::client::{eth_balance, HttpProvider};
use crate::contracts;
use crate::error::Result;
use crate::poll::{wait_or_timeout, PollSpec};
use crate::submit::TxSubmitter;
use crate::traits::RoleGrantable;
use crate::types::{schain_hash, Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `DepositBoxEth` contract.
pub struct DepositBoxEth {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl DepositBoxEth {
    pub fn new(address: Address, provider: Arc<HttpProvider>) -> Self {
        Self {
            address,
            submitter: TxSubmitter::new(provider.clone()),
            provider,
        }
    }

    /// Deployed contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Deposit native coin towards a schain. The amount is
    /// `options.value`.
    pub async fn deposit(
        &self,
        schain_name: &str,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxEth::depositCall {
            schainName: schain_name.to_string(),
        }
        .abi_encode();

        info!(schain = %schain_name, value = ?options.value, "Depositing native coin");
        self.submitter
            .submit(
                &TransactionIntent::with_value(self.address, data.into(), options.value),
                options,
            )
            .await
    }

    /// Retrieve coin escrowed back to the sender by an exit from a schain.
    pub async fn get_my_eth(&self, options: &SubmissionOptions) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxEth::getMyEthCall {}.abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Total native coin currently locked towards a schain.
    pub async fn transferred_amount(&self, schain_name: &str) -> Result<U256> {
        let instance = contracts::DepositBoxEth::new(self.address, &*self.provider);
        let result = instance
            .transferredAmount(schain_hash(schain_name))
            .call()
            .await?;
        Ok(result._0)
    }

    /// Wait for an account's native balance to move off `before`.
    /// Resolves `Ok(false)` without error when no change is observed.
    pub async fn wait_eth_balance_change(
        &self,
        account: Address,
        before: U256,
        spec: &PollSpec,
    ) -> Result<bool> {
        wait_or_timeout(spec, &before, || eth_balance(&self.provider, account)).await
    }
}

#[async_trait]
impl RoleGrantable for DepositBoxEth {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::DepositBoxEth::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::DepositBoxEth::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
