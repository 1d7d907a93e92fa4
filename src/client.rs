//! RPC Client Construction
//!
//! Thin wrapper over alloy's HTTP provider. All wrappers share one
//! [`HttpProvider`] per chain behind an `Arc`; the provider itself is safe
//! for concurrent use and this SDK adds no locking of its own.

use std::sync::Arc;

use alloy::{
    providers::{Provider, ProviderBuilder, RootProvider},
    transports::http::{Client, Http},
};
use tracing::info;

use crate::error::{Error, Result};

/// The concrete provider type used throughout the SDK.
pub type HttpProvider = RootProvider<Http<Client>>;

/// Connect an HTTP JSON-RPC provider to an endpoint.
///
/// Construction is lazy: no request is issued until the first call.
pub fn connect_http(rpc_url: &str) -> Result<Arc<HttpProvider>> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| Error::InvalidArguments(format!("invalid RPC URL {rpc_url}: {e}")))?;

    let provider = ProviderBuilder::new().on_http(url);

    info!(rpc_url = %rpc_url, "Connected HTTP provider");
    Ok(Arc::new(provider))
}

/// Query the native coin balance of an account.
pub async fn eth_balance(
    provider: &HttpProvider,
    address: alloy::primitives::Address,
) -> Result<alloy::primitives::U256> {
    let balance = provider.get_balance(address).await?;
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_is_lazy_and_validates_url() {
        // No node needed: construction never issues a request.
        assert!(connect_http("http://localhost:8545").is_ok());
        assert!(matches!(
            connect_http("not a url"),
            Err(Error::InvalidArguments(_))
        ));
    }
}
