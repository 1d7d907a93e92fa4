//! Chain Handles
//!
//! One handle per connected chain, bundling a shared HTTP provider with a
//! wrapper for every IMA contract named in that chain's deployment registry.
//! Handles are plain structs with public wrapper fields; drop a handle to
//! disconnect.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use tracing::info;

use crate::abi::DeploymentRegistry;
use crate::client::{self, HttpProvider};
use crate::error::Result;
use crate::mainnet::{
    CommunityPool, DepositBoxErc1155, DepositBoxErc20, DepositBoxErc721, DepositBoxEth, Linker,
    MessageProxyForMainnet,
};
use crate::schain::{
    CommunityLocker, TokenManagerErc1155, TokenManagerErc20, TokenManagerErc721, TokenManagerEth,
    TokenManagerLinker,
};

/// Connection to the main chain with all deposit-side contract wrappers.
pub struct MainnetChain {
    provider: Arc<HttpProvider>,
    pub eth: DepositBoxEth,
    pub erc20: DepositBoxErc20,
    pub erc721: DepositBoxErc721,
    pub erc1155: DepositBoxErc1155,
    pub community_pool: CommunityPool,
    pub linker: Linker,
    pub message_proxy: MessageProxyForMainnet,
}

impl MainnetChain {
    /// Connect to a main-chain endpoint and wire every wrapper to its
    /// registry address.
    pub fn new(rpc_url: &str, registry: &DeploymentRegistry) -> Result<Self> {
        let provider = client::connect_http(rpc_url)?;

        let chain = Self {
            eth: DepositBoxEth::new(registry.address("deposit_box_eth")?, provider.clone()),
            erc20: DepositBoxErc20::new(registry.address("deposit_box_erc20")?, provider.clone()),
            erc721: DepositBoxErc721::new(
                registry.address("deposit_box_erc721")?,
                provider.clone(),
            ),
            erc1155: DepositBoxErc1155::new(
                registry.address("deposit_box_erc1155")?,
                provider.clone(),
            ),
            community_pool: CommunityPool::new(
                registry.address("community_pool")?,
                provider.clone(),
            ),
            linker: Linker::new(registry.address("linker")?, provider.clone()),
            message_proxy: MessageProxyForMainnet::new(
                registry.address("message_proxy_mainnet")?,
                provider.clone(),
            ),
            provider,
        };

        info!(rpc_url = %rpc_url, "Main chain connected");
        Ok(chain)
    }

    pub fn provider(&self) -> Arc<HttpProvider> {
        self.provider.clone()
    }

    /// Native coin balance of an account on the main chain.
    pub async fn eth_balance(&self, address: Address) -> Result<U256> {
        client::eth_balance(&self.provider, address).await
    }
}

/// Connection to one schain with all exit-side contract wrappers.
pub struct SchainChain {
    name: String,
    provider: Arc<HttpProvider>,
    pub eth: TokenManagerEth,
    pub erc20: TokenManagerErc20,
    pub erc721: TokenManagerErc721,
    pub erc1155: TokenManagerErc1155,
    pub linker: TokenManagerLinker,
    pub community_locker: CommunityLocker,
}

impl SchainChain {
    /// Connect to a schain endpoint and wire every wrapper to its registry
    /// address.
    pub fn new(rpc_url: &str, name: &str, registry: &DeploymentRegistry) -> Result<Self> {
        let provider = client::connect_http(rpc_url)?;

        let chain = Self {
            name: name.to_string(),
            eth: TokenManagerEth::new(registry.address("token_manager_eth")?, provider.clone()),
            erc20: TokenManagerErc20::new(
                registry.address("token_manager_erc20")?,
                provider.clone(),
            ),
            erc721: TokenManagerErc721::new(
                registry.address("token_manager_erc721")?,
                provider.clone(),
            ),
            erc1155: TokenManagerErc1155::new(
                registry.address("token_manager_erc1155")?,
                provider.clone(),
            ),
            linker: TokenManagerLinker::new(
                registry.address("token_manager_linker")?,
                provider.clone(),
            ),
            community_locker: CommunityLocker::new(
                registry.address("community_locker")?,
                provider.clone(),
            ),
            provider,
        };

        info!(rpc_url = %rpc_url, schain = %name, "Schain connected");
        Ok(chain)
    }

    /// The schain's registered name, as used in cross-chain calls.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> Arc<HttpProvider> {
        self.provider.clone()
    }

    /// Native (schain) coin balance of an account.
    pub async fn eth_balance(&self, address: Address) -> Result<U256> {
        client::eth_balance(&self.provider, address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn registry_with(keys: &[&str]) -> DeploymentRegistry {
        let mut map = serde_json::Map::new();
        for key in keys {
            map.insert(
                format!("{key}_address"),
                json!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            );
        }
        DeploymentRegistry::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_mainnet_chain_requires_all_contracts() {
        let complete = registry_with(&[
            "deposit_box_eth",
            "deposit_box_erc20",
            "deposit_box_erc721",
            "deposit_box_erc1155",
            "community_pool",
            "linker",
            "message_proxy_mainnet",
        ]);
        assert!(MainnetChain::new("http://localhost:8545", &complete).is_ok());

        let partial = registry_with(&["deposit_box_eth"]);
        assert!(matches!(
            MainnetChain::new("http://localhost:8545", &partial),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_schain_chain_requires_all_contracts() {
        let complete = registry_with(&[
            "token_manager_eth",
            "token_manager_erc20",
            "token_manager_erc721",
            "token_manager_erc1155",
            "token_manager_linker",
            "community_locker",
        ]);
        let chain = SchainChain::new("http://localhost:8546", "test-schain", &complete).unwrap();
        assert_eq!(chain.name(), "test-schain");

        let empty = DeploymentRegistry::default();
        assert!(SchainChain::new("http://localhost:8546", "test-schain", &empty).is_err());
    }
}
