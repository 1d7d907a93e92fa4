//! Main-chain linker wrapper.

use std::sync::Arc;

use alloy::{
    primitives::Address,
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use async_trait::async_trait;
use tracing::info;

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;
use crate::submit::TxSubmitter;
use crate::traits::RoleGrantable;
use crate::types::{Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `Linker` contract, which registers schains against the
/// main-chain deposit boxes.
pub struct Linker {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl Linker {
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

    /// Connect a schain, registering its token manager addresses
    /// (requires `LINKER_ROLE`).
    pub async fn connect_schain(
        &self,
        schain_name: &str,
        token_managers: Vec<Address>,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::Linker::connectSchainCall {
            schainName: schain_name.to_string(),
            tokenManagerAddresses: token_managers.clone(),
        }
        .abi_encode();

        info!(schain = %schain_name, managers = token_managers.len(), "Connecting schain");
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Whether a schain is connected.
    pub async fn has_schain(&self, schain_name: &str) -> Result<bool> {
        let result = contracts::Linker::new(self.address, &*self.provider)
            .hasSchain(schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }
}

#[async_trait]
impl RoleGrantable for Linker {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::Linker::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::Linker::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
