//! Transaction Submitter
//!
//! Turns a [`TransactionIntent`] plus [`SubmissionOptions`] into exactly one
//! provider submission, with local or delegated signing and normalized error
//! reporting. No retries happen here: nonce and gas are resolved fresh for
//! each call, and one logical attempt corresponds to one provider call.
//!
//! ## Signing modes
//!
//! - No private key in the options: the request (resolved nonce, target,
//!   data, value) is handed to the node-managed account via
//!   `eth_sendTransaction`.
//! - Private key present: the key is validated, the derived address must
//!   match the configured sender, and the fully assembled transaction is
//!   signed locally and sent via `eth_sendRawTransaction`.
//!
//! ## Error classification
//!
//! Rejections carrying the node's "reverted by the EVM" marker are parsed
//! for a `revertReason` and re-raised as [`Error::RevertedTransaction`] or
//! [`Error::FailedTransaction`]; all other failures pass through unchanged.

use std::sync::Arc;

use alloy::{
    eips::eip2718::Encodable2718,
    network::{EthereumWallet, TransactionBuilder},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::{debug, info};

use crate::client::HttpProvider;
use crate::error::{Error, Result};
use crate::keys::{addresses_match, parse_address, parse_signer};
use crate::types::{SubmissionOptions, TransactionIntent};

/// Marker emitted by nodes when a transaction is rejected by EVM execution.
/// The revert receipt follows as a JSON payload.
pub const EVM_REVERT_MARKER: &str = "Transaction has been reverted by the EVM";

/// Submits encoded contract calls for one chain.
#[derive(Clone)]
pub struct TxSubmitter {
    provider: Arc<HttpProvider>,
}

impl TxSubmitter {
    /// Create a submitter over a shared provider.
    pub fn new(provider: Arc<HttpProvider>) -> Self {
        Self { provider }
    }

    /// Submit an intent and wait for its receipt.
    ///
    /// Exactly one provider submission is attempted. The intent's own value
    /// takes precedence; otherwise `options.value` is attached.
    pub async fn submit(
        &self,
        intent: &TransactionIntent,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        match options.private_key.as_deref() {
            Some(key) if !key.is_empty() => self.submit_signed(intent, options, key).await,
            _ => self.submit_delegated(intent, options).await,
        }
    }

    /// Delegated path: the node-managed account signs.
    async fn submit_delegated(
        &self,
        intent: &TransactionIntent,
        options: &SubmissionOptions,
    ) -> Result<TransactionReceipt> {
        let from = parse_address(&options.address)?;
        let nonce = self.provider.get_transaction_count(from).await?;

        let mut tx = TransactionRequest::default()
            .with_from(from)
            .with_to(intent.to)
            .with_input(intent.data.clone())
            .with_nonce(nonce);
        if let Some(value) = intent.value.or(options.value) {
            tx = tx.with_value(value);
        }

        info!(to = %intent.to, from = %from, nonce, "Submitting via node-managed account");

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(reclassify)?;
        finalize(pending.get_receipt().await.map_err(reclassify)?)
    }

    /// Local path: validate credentials, assemble, sign, send raw.
    async fn submit_signed(
        &self,
        intent: &TransactionIntent,
        options: &SubmissionOptions,
        key: &str,
    ) -> Result<TransactionReceipt> {
        // Credential checks run before any network call.
        let signer = parse_signer(key)?;
        let from = signer.address();
        if !addresses_match(&options.address, from) {
            return Err(Error::InvalidCredentials(format!(
                "private key controls {from}, not the configured sender {}",
                options.address
            )));
        }

        let nonce = self.provider.get_transaction_count(from).await?;
        let chain_id = self.provider.get_chain_id().await?;
        let gas_price = self.provider.get_gas_price().await?;

        let mut tx = TransactionRequest::default()
            .with_from(from)
            .with_to(intent.to)
            .with_input(intent.data.clone())
            .with_nonce(nonce)
            .with_chain_id(chain_id)
            .with_gas_price(gas_price);
        if let Some(value) = intent.value.or(options.value) {
            tx = tx.with_value(value);
        }

        let gas = self.provider.estimate_gas(&tx).await.map_err(reclassify)?;
        let tx = tx.with_gas_limit(gas);

        debug!(to = %intent.to, nonce, chain_id, gas, gas_price, "Assembled transaction");

        let wallet = EthereumWallet::from(signer);
        let envelope = tx.build(&wallet).await?;

        info!(to = %intent.to, from = %from, nonce, "Submitting locally signed transaction");

        let pending = self
            .provider
            .send_raw_transaction(&envelope.encoded_2718())
            .await
            .map_err(reclassify)?;
        finalize(pending.get_receipt().await.map_err(reclassify)?)
    }
}

/// A mined receipt with a failure status carries no decodable reason.
fn finalize(receipt: TransactionReceipt) -> Result<TransactionReceipt> {
    if receipt.status() {
        Ok(receipt)
    } else {
        Err(Error::FailedTransaction(format!(
            "transaction {} failed without a revert reason",
            receipt.transaction_hash
        )))
    }
}

/// Classify a provider rejection message.
///
/// Returns `Some` only when the message carries [`EVM_REVERT_MARKER`]:
/// `RevertedTransaction` when the trailing JSON payload holds a
/// `revertReason`, generic `FailedTransaction` otherwise.
pub fn classify_rejection(message: &str) -> Option<Error> {
    let at = message.find(EVM_REVERT_MARKER)?;
    let tail = &message[at + EVM_REVERT_MARKER.len()..];

    let reason = tail
        .find('{')
        .and_then(|start| serde_json::from_str::<serde_json::Value>(tail[start..].trim()).ok())
        .and_then(|payload| {
            payload
                .get("revertReason")
                .and_then(|r| r.as_str())
                .map(str::to_owned)
        });

    Some(match reason {
        Some(reason) => Error::RevertedTransaction(reason),
        None => Error::FailedTransaction(
            "transaction was reverted by the EVM without a revert reason".into(),
        ),
    })
}

/// Re-raise a provider rejection with its normalized kind, or pass it
/// through unchanged when it does not match a known revert shape.
fn reclassify<E: Into<Error> + std::fmt::Display>(err: E) -> Error {
    match classify_rejection(&err.to_string()) {
        Some(classified) => classified,
        None => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::connect_http;
    use alloy::primitives::{Address, Bytes};
    use crate::types::TransactionIntent;

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDR: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn submitter() -> TxSubmitter {
        // Unroutable endpoint: credential failures must surface before any
        // request is issued, so these tests never touch the network.
        TxSubmitter::new(connect_http("http://127.0.0.1:1").unwrap())
    }

    fn intent() -> TransactionIntent {
        TransactionIntent::new(Address::ZERO, Bytes::from(vec![0xab, 0xcd]))
    }

    #[tokio::test]
    async fn test_malformed_key_fails_before_network() {
        let opts = SubmissionOptions::with_key(ADDR, "not-a-key");
        let err = submitter().submit(&intent(), &opts).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_mismatched_sender_fails_before_network() {
        let opts =
            SubmissionOptions::with_key("0x0000000000000000000000000000000000000001", KEY);
        let err = submitter().submit(&intent(), &opts).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_bare_hex_sender_accepted() {
        // Same account without the 0x prefix passes the credential check and
        // proceeds to nonce resolution, which fails on the unroutable
        // endpoint as a transport error, not a credential error.
        let opts = SubmissionOptions::with_key(&ADDR[2..], KEY);
        let err = submitter().submit(&intent(), &opts).await.unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
    }

    #[test]
    fn test_classify_revert_with_reason() {
        let message = format!(
            "{EVM_REVERT_MARKER}:\n{{\"transactionHash\":\"0xabc\",\"revertReason\":\"Sender contract is not registered\",\"status\":false}}"
        );
        match classify_rejection(&message) {
            Some(Error::RevertedTransaction(reason)) => {
                assert_eq!(reason, "Sender contract is not registered")
            }
            other => panic!("expected RevertedTransaction, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_revert_without_reason() {
        let message = format!("{EVM_REVERT_MARKER}:\n{{\"transactionHash\":\"0xabc\"}}");
        assert!(matches!(
            classify_rejection(&message),
            Some(Error::FailedTransaction(_))
        ));
    }

    #[test]
    fn test_classify_marker_without_payload() {
        assert!(matches!(
            classify_rejection(EVM_REVERT_MARKER),
            Some(Error::FailedTransaction(_))
        ));
    }

    #[test]
    fn test_other_errors_are_not_classified() {
        assert!(classify_rejection("connection refused").is_none());
        assert!(classify_rejection("nonce too low").is_none());
    }
}
