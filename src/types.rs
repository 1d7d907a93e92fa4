//! Common types for bridge operations
//!
//! Shared value types used by every contract wrapper: unsent transaction
//! intents, caller-supplied submission options, tagged single-vs-batch token
//! values, role identifiers, and schain name hashing.

use std::fmt;

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};

use crate::error::{Error, Result};
use crate::redact::Redacted;

// ============================================================================
// Transaction Intent
// ============================================================================

/// An unsent, fully encoded contract call.
///
/// Immutable once built: produced by a contract wrapper, consumed exactly once
/// by the transaction submitter. Never retried automatically.
#[derive(Debug, Clone)]
pub struct TransactionIntent {
    /// Target contract address.
    pub to: Address,
    /// ABI-encoded call data.
    pub data: Bytes,
    /// Native coin amount to attach, if any.
    pub value: Option<U256>,
}

impl TransactionIntent {
    /// Build an intent with no attached value.
    pub fn new(to: Address, data: Bytes) -> Self {
        Self {
            to,
            data,
            value: None,
        }
    }

    /// Build an intent with an optional attached value.
    pub fn with_value(to: Address, data: Bytes, value: Option<U256>) -> Self {
        Self { to, data, value }
    }
}

// ============================================================================
// Submission Options
// ============================================================================

/// Caller-supplied configuration for a single transaction submission.
///
/// When `private_key` is present and well-formed, the transaction is signed
/// locally; otherwise sending is delegated to the node-managed account
/// associated with `address`.
#[derive(Clone, Default)]
pub struct SubmissionOptions {
    /// Sender account, hex with or without `0x` prefix.
    pub address: String,
    /// Optional secret for local signing.
    pub private_key: Option<String>,
    /// Native coin amount to attach to the call.
    pub value: Option<U256>,
}

impl SubmissionOptions {
    /// Options for a node-managed (externally signed) account.
    pub fn for_account(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            private_key: None,
            value: None,
        }
    }

    /// Options for local signing with a private key.
    pub fn with_key(address: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            private_key: Some(private_key.into()),
            value: None,
        }
    }

    /// Attach a native coin amount to the call.
    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

/// Custom Debug that redacts the private key to prevent accidental log leakage.
impl fmt::Debug for SubmissionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionOptions")
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(Redacted))
            .field("value", &self.value)
            .finish()
    }
}

// ============================================================================
// Token Values (single vs batch)
// ============================================================================

/// Token id/amount shape for ERC1155 operations.
///
/// A tagged variant replaces dynamic scalar-vs-array arguments: mixed shapes
/// are unrepresentable, and batch length mismatches are rejected at
/// construction, before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// One token id with one amount.
    Single { id: U256, amount: U256 },
    /// Parallel id/amount arrays of equal, non-zero length.
    Batch { ids: Vec<U256>, amounts: Vec<U256> },
}

impl TokenValue {
    /// A single id/amount pair.
    pub fn single(id: impl Into<U256>, amount: impl Into<U256>) -> Self {
        TokenValue::Single {
            id: id.into(),
            amount: amount.into(),
        }
    }

    /// A validated batch of id/amount pairs.
    pub fn batch(ids: Vec<U256>, amounts: Vec<U256>) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::InvalidArguments(
                "token batch must not be empty".into(),
            ));
        }
        if ids.len() != amounts.len() {
            return Err(Error::InvalidArguments(format!(
                "token ids and amounts must have matching lengths, got {} ids and {} amounts",
                ids.len(),
                amounts.len()
            )));
        }
        Ok(TokenValue::Batch { ids, amounts })
    }

    /// Number of id/amount pairs carried.
    pub fn len(&self) -> usize {
        match self {
            TokenValue::Single { .. } => 1,
            TokenValue::Batch { ids, .. } => ids.len(),
        }
    }

    /// Always false: singles carry one pair and batches reject emptiness.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// Role Identifiers
// ============================================================================

/// 32-byte AccessControl role identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Role(pub B256);

impl Role {
    /// The zero-valued `DEFAULT_ADMIN_ROLE`.
    pub const DEFAULT_ADMIN: Role = Role(B256::ZERO);

    /// Role identifier from its Solidity name, e.g. `"LINKER_ROLE"`.
    pub fn of(name: &str) -> Self {
        Role(keccak256(name.as_bytes()))
    }

    /// The raw 32-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ============================================================================
// Schain Hashing
// ============================================================================

/// keccak256 hash of a schain name, the contract-side chain key.
pub fn schain_hash(name: &str) -> B256 {
    keccak256(name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_construction() {
        let to = Address::ZERO;
        let intent = TransactionIntent::new(to, Bytes::from(vec![1, 2, 3]));
        assert!(intent.value.is_none());

        let intent = TransactionIntent::with_value(to, Bytes::new(), Some(U256::from(5)));
        assert_eq!(intent.value, Some(U256::from(5)));
    }

    #[test]
    fn test_submission_options_debug_redacts_key() {
        let opts = SubmissionOptions::with_key("0xdead", "super-secret-key");
        let debug = format!("{opts:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));

        let opts = SubmissionOptions::for_account("0xdead");
        assert!(format!("{opts:?}").contains("None"));
    }

    #[test]
    fn test_token_value_batch_validation() {
        let ok = TokenValue::batch(
            vec![U256::from(1), U256::from(2)],
            vec![U256::from(10), U256::from(20)],
        )
        .unwrap();
        assert_eq!(ok.len(), 2);

        let mismatched = TokenValue::batch(vec![U256::from(1)], vec![]);
        assert!(matches!(mismatched, Err(Error::InvalidArguments(_))));

        let empty = TokenValue::batch(vec![], vec![]);
        assert!(matches!(empty, Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_role_of_is_keccak_of_name() {
        let role = Role::of("LINKER_ROLE");
        assert_eq!(role.0, keccak256(b"LINKER_ROLE"));
        assert_ne!(role, Role::DEFAULT_ADMIN);
        assert_eq!(Role::DEFAULT_ADMIN.0, B256::ZERO);
    }

    #[test]
    fn test_schain_hash_differs_per_name() {
        assert_ne!(schain_hash("rapping-zuben"), schain_hash("fancy-schain"));
        assert_eq!(schain_hash("x"), keccak256(b"x"));
    }
}
