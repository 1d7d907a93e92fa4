//! Main-chain message proxy wrapper (read-only surface).

use std::sync::Arc;

use alloy::primitives::{Address, U256};

use crate::client::HttpProvider;
use crate::contracts;
use crate::error::Result;

/// Wrapper for the `MessageProxyForMainnet` contract.
pub struct MessageProxyForMainnet {
    address: Address,
    provider: Arc<HttpProvider>,
}

impl MessageProxyForMainnet {
    pub fn new(address: Address, provider: Arc<HttpProvider>) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Whether a chain connection is registered on the proxy.
    pub async fn is_chain_connected(&self, schain_name: &str) -> Result<bool> {
        let result = contracts::MessageProxyForMainnet::new(self.address, &*self.provider)
            .isConnectedChain(schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }

    /// Messages sent towards a chain so far.
    pub async fn outgoing_messages_counter(&self, schain_name: &str) -> Result<U256> {
        let result = contracts::MessageProxyForMainnet::new(self.address, &*self.provider)
            .getOutgoingMessagesCounter(schain_name.to_string())
            .call()
            .await?;
        Ok(result._0)
    }
}
