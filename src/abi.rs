//! Deployment Registry Loading
//!
//! IMA deployments ship a JSON file mapping contract names to deployed
//! addresses (and ABI arrays, which this SDK does not interpret; typed
//! bindings are generated at compile time). Keys follow the upstream naming
//! scheme, e.g. `deposit_box_eth_address`, `token_manager_erc20_address`.
//!
//! Loading contract: a path that does not reference an existing regular file
//! yields an empty registry (no error); malformed JSON content is an error.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::keys::parse_address;
use alloy::primitives::Address;

/// Parsed deployment JSON for one chain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DeploymentRegistry {
    entries: Map<String, Value>,
}

impl DeploymentRegistry {
    /// Load a deployment file. A missing file yields an empty registry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            warn!(path = %path.display(), "Deployment file not found, using empty registry");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&raw)?;

        info!(
            path = %path.display(),
            entries = registry.entries.len(),
            "Loaded deployment registry"
        );
        Ok(registry)
    }

    /// Build a registry from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::InvalidArguments(format!(
                "deployment registry must be a JSON object, got {other}"
            ))),
        }
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the deployed address for a contract, looking up
    /// `<contract>_address`.
    pub fn address(&self, contract: &str) -> Result<Address> {
        let key = format!("{contract}_address");
        let value = self.entries.get(&key).and_then(Value::as_str).ok_or_else(|| {
            Error::InvalidArguments(format!("deployment registry has no entry for {key}"))
        })?;
        parse_address(value)
            .map_err(|_| Error::InvalidArguments(format!("malformed address under {key}: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_yields_empty_registry() {
        let registry =
            DeploymentRegistry::load("/nonexistent/path/to/deployment.json").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_resolves_addresses_from_file() {
        let path = std::env::temp_dir().join("ima_client_deployment_registry.json");
        std::fs::write(
            &path,
            r#"{"linker_address": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266", "linker_abi": []}"#,
        )
        .unwrap();
        let registry = DeploymentRegistry::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!registry.is_empty());
        assert_eq!(
            format!("{:#x}", registry.address("linker").unwrap()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = std::env::temp_dir().join("ima_client_malformed_registry.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = DeploymentRegistry::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_address_lookup() {
        let registry = DeploymentRegistry::from_value(json!({
            "deposit_box_eth_address": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "deposit_box_eth_abi": [],
        }))
        .unwrap();

        let addr = registry.address("deposit_box_eth").unwrap();
        assert_eq!(
            format!("{addr:#x}"),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );

        assert!(matches!(
            registry.address("linker"),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_non_object_root_rejected() {
        assert!(matches!(
            DeploymentRegistry::from_value(json!([1, 2, 3])),
            Err(Error::InvalidArguments(_))
        ));
    }
}
