//! SDK Error Taxonomy
//!
//! Every operation in this crate returns [`Result`] with a classified [`Error`].
//! Validation failures (`InvalidCredentials`, `InvalidArguments`) are raised
//! synchronously, before any network call is attempted. Submission failures are
//! classified once at the point the provider rejection is caught; transport and
//! provider errors that do not match a known revert shape pass through
//! unchanged via the transparent variants.

use alloy::network::{Ethereum, TransactionBuilderError};

/// Errors produced by the IMA client SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed private key, or key/sender address mismatch.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Caller-supplied arguments failed boundary validation.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Transaction was reverted on-chain with a decodable reason.
    #[error("transaction reverted: {0}")]
    RevertedTransaction(String),

    /// Transaction failed on-chain without a decodable revert reason.
    #[error("transaction failed: {0}")]
    FailedTransaction(String),

    /// A bounded poll exhausted its attempts without observing the
    /// expected change.
    #[error("timed out waiting for {0}")]
    Timeout(String),

    /// Transport / JSON-RPC provider failure (not reclassified).
    #[error(transparent)]
    Rpc(#[from] alloy::transports::TransportError),

    /// Contract read (eth_call) failure.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),

    /// Failure while awaiting a pending transaction receipt.
    #[error(transparent)]
    Pending(#[from] alloy::providers::PendingTransactionError),

    /// Failure assembling a transaction for local signing.
    #[error(transparent)]
    TxBuild(#[from] TransactionBuilderError<Ethereum>),

    /// Malformed JSON in a deployment registry file.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Filesystem failure while reading a deployment registry file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_classification() {
        let err = Error::InvalidCredentials("private key must be 64 hex characters".into());
        assert!(err.to_string().starts_with("invalid credentials"));

        let err = Error::RevertedTransaction("Sender contract is not registered".into());
        assert_eq!(
            err.to_string(),
            "transaction reverted: Sender contract is not registered"
        );

        let err = Error::Timeout("token clone for 0xdead on Mainnet".into());
        assert!(err.to_string().contains("token clone"));
    }
}
