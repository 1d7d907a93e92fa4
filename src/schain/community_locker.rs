//! Exit-message rate limiting wrapper.

use std::sync::Arc;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use async_trait::async_trait;

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;
use crate::submit::TxSubmitter;
use crate::traits::RoleGrantable;
use crate::types::{schain_hash, Role, SubmissionOptions, TransactionIntent};

/// Wrapper for the `CommunityLocker` contract.
pub struct CommunityLocker {
    address: Address,
    provider: Arc<HttpProvider>,
    submitter: TxSubmitter,
}

impl CommunityLocker {
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

    /// Set the minimum delay between exit messages per user
    /// (constant-setter role).
    pub async fn set_time_limit_per_message(
        &self,
        chain_name: &str,
        new_limit: U256,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::CommunityLocker::setTimeLimitPerMessageCall {
            chainName: chain_name.to_string(),
            newTimeLimit: new_limit,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    /// Current delay between exit messages for a chain, in seconds.
    pub async fn time_limit_per_message(&self, chain_name: &str) -> Result<U256> {
        let result = contracts::CommunityLocker::new(self.address, &*self.provider)
            .timeLimitPerMessage(schain_hash(chain_name))
            .call()
            .await?;
        Ok(result._0)
    }
}

#[async_trait]
impl RoleGrantable for CommunityLocker {
    async fn grant_role(
        &self,
        role: Role,
        account: Address,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let data = contracts::CommunityLocker::grantRoleCall {
            role: role.0,
            account,
        }
        .abi_encode();
        self.submitter
            .submit(&TransactionIntent::new(self.address, data.into()), options)
            .await
    }

    async fn has_role(&self, role: Role, account: Address) -> Result<bool> {
        let result = contracts::CommunityLocker::new(self.address, &*self.provider)
            .hasRole(role.0, account)
            .call()
            .await?;
        Ok(result._0)
    }
}
