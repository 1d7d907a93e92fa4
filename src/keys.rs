//! Credential Validation and Address Normalization
//!
//! Centralizes the handful of validation rules shared across all contract
//! wrappers: private key format checks, address derivation from a key, and
//! idempotent `0x` prefix handling. All checks here run before any network
//! call is made.

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::error::{Error, Result};

/// Expected length of a bare-hex private key.
const PRIVATE_KEY_HEX_LEN: usize = 64;

/// Add a `0x` prefix if not already present.
pub fn add_0x(s: &str) -> String {
    if s.starts_with("0x") {
        s.to_string()
    } else {
        format!("0x{s}")
    }
}

/// Strip a `0x` prefix if present.
pub fn remove_0x(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Validate a private key: exactly 64 hex characters, optional `0x` prefix,
/// case-insensitive. Returns the normalized bare-hex lowercase form.
pub fn validate_private_key(key: &str) -> Result<String> {
    let bare = remove_0x(key);
    if bare.len() != PRIVATE_KEY_HEX_LEN || !bare.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidCredentials(format!(
            "private key must be {PRIVATE_KEY_HEX_LEN} hex characters (optionally 0x-prefixed)"
        )));
    }
    Ok(bare.to_ascii_lowercase())
}

/// Parse a private key into a local signer, validating its format first.
pub fn parse_signer(key: &str) -> Result<PrivateKeySigner> {
    let bare = validate_private_key(key)?;
    bare.parse().map_err(|e| {
        Error::InvalidCredentials(format!("private key rejected by signer: {e}"))
    })
}

/// Derive the account address controlled by a private key.
pub fn derive_address(key: &str) -> Result<Address> {
    Ok(parse_signer(key)?.address())
}

/// Parse an account address from hex, with or without `0x` prefix.
pub fn parse_address(s: &str) -> Result<Address> {
    let bare = remove_0x(s);
    let bytes = hex::decode(bare)
        .map_err(|e| Error::InvalidCredentials(format!("invalid account address: {e}")))?;
    if bytes.len() != 20 {
        return Err(Error::InvalidCredentials(format!(
            "account address must be 20 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(Address::from_slice(&bytes))
}

/// Compare a caller-supplied address string against a derived address,
/// accepting both `0x`-prefixed and bare-hex forms as equal.
pub fn addresses_match(supplied: &str, derived: Address) -> bool {
    remove_0x(supplied).eq_ignore_ascii_case(&hex::encode(derived.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's well-known first dev account
    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDR: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_add_remove_0x_roundtrip() {
        for s in ["deadbeef", "0xdeadbeef", "", "0x"] {
            assert_eq!(add_0x(remove_0x(s)), add_0x(s));
            assert_eq!(remove_0x(&add_0x(s)), remove_0x(s));
        }
        assert_eq!(add_0x("ab"), "0xab");
        assert_eq!(add_0x("0xab"), "0xab");
        assert_eq!(remove_0x("0xab"), "ab");
        assert_eq!(remove_0x("ab"), "ab");
    }

    #[test]
    fn test_validate_private_key_accepts_both_prefixes() {
        assert!(validate_private_key(KEY).is_ok());
        assert!(validate_private_key(&format!("0x{KEY}")).is_ok());
        assert!(validate_private_key(&KEY.to_uppercase()).is_ok());
    }

    #[test]
    fn test_validate_private_key_rejects_malformed() {
        for bad in [
            "",
            "0x",
            "abc",
            &KEY[..63],
            &format!("{KEY}0"),
            &format!("zz{}", &KEY[2..]),
        ] {
            let err = validate_private_key(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidCredentials(_)), "key: {bad:?}");
        }
    }

    #[test]
    fn test_derive_address_matches_known_account() {
        let derived = derive_address(KEY).unwrap();
        assert!(addresses_match(ADDR, derived));
        assert!(addresses_match(remove_0x(ADDR), derived));
        assert!(addresses_match(&ADDR.to_lowercase(), derived));
    }

    #[test]
    fn test_addresses_match_rejects_other_account() {
        let derived = derive_address(KEY).unwrap();
        assert!(!addresses_match(
            "0x0000000000000000000000000000000000000001",
            derived
        ));
    }

    #[test]
    fn test_parse_address_both_forms() {
        let a = parse_address(ADDR).unwrap();
        let b = parse_address(remove_0x(ADDR)).unwrap();
        assert_eq!(a, b);

        assert!(matches!(
            parse_address("0xdead"),
            Err(Error::InvalidCredentials(_))
        ));
    }
}
