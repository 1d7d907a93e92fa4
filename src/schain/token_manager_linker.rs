//! Schain-side linker wrapper for schain-to-schain connections.

use std::sync::Arc;

use alloy::{primitives::Address, rpc::types::TransactionReceipt, sol_types::SolCall};
use async_trait::async_trait;
use tracing::info;

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;
use crate::submit::TxSubmitter;
use crate::traits::RoleGrantable;
use crate::types::{Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `TokenManagerLinker` contract.
pub struct TokenManagerLinker {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl TokenManagerLinker {
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

    /// Connect another schain for schain-to-schain transfers (registrar role).
    pub async fn connect_schain(
        &self,
        schain_name: &str,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerLinker::connectSchainCall {
            schainName: schain_name.to_string(),
        }
        .abi_encode();

        info!(schain = %schain_name, "Connecting schain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Disconnect a previously connected schain.
    pub async fn disconnect_schain(
        &self,
        schain_name: &str,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerLinker::disconnectSchainCall {
            schainName: schain_name.to_string(),
        }
        .abi_encode();

        info!(schain = %schain_name, "Disconnecting schain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether another schain is connected to this one.
    pub async fn has_schain(&self, schain_name: &str) -> Result<bool> {
        let result = contracts::TokenManagerLinker::new(self.address, &*self.provider)
            .hasSchain(schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }
}

#[async_trait]
impl RoleGrantable for TokenManagerLinker {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::TokenManagerLinker::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::TokenManagerLinker::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
