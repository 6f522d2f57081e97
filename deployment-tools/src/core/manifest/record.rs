// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::Deserialize;
use serde_json::Value;

/// One deployed contract instance.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ContractRecord {
    pub address: Option<String>,
    pub artifact_name: Option<String>,
    pub constructor_arguments: Option<ConstructorArguments>,
    pub vault_name: Option<String>,
}

// Arguments stay plain `Value`s here so large integers keep every digit.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    artifact_name: Option<String>,
    #[serde(default)]
    constructor_arguments: Option<Value>,
    #[serde(default)]
    constructor_args: Option<Value>,
    #[serde(default)]
    vault_name: Option<String>,
}

impl TryFrom<RawRecord> for ContractRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let constructor_arguments = raw
            .constructor_arguments
            .or(raw.constructor_args)
            .map(ConstructorArguments::try_from)
            .transpose()?;
        Ok(Self {
            address: raw.address,
            artifact_name: raw.artifact_name,
            constructor_arguments,
            vault_name: raw.vault_name,
        })
    }
}

impl ContractRecord {
    /// Deployed address, if the record has a usable one.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|address| !address.is_empty())
    }

    pub fn matches_address(&self, address: &str) -> bool {
        self.address()
            .is_some_and(|own| own.eq_ignore_ascii_case(address))
    }
}

/// Constructor arguments as the deploy scripts recorded them.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructorArguments {
    /// Raw JSON values whose ABI types have to be inferred.
    Values(Vec<Value>),
    /// Already ABI-encoded hex, passed through as is.
    Encoded(String),
}

impl TryFrom<Value> for ConstructorArguments {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(Self::Values(values)),
            Value::String(encoded) => Ok(Self::Encoded(encoded)),
            other => Err(format!(
                "constructor arguments must be a list or a hex string, got {other}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn legacy_constructor_args_key() {
        let record: ContractRecord =
            serde_json::from_value(json!({ "address": "0x1", "constructorArgs": [1, "a"] }))
                .unwrap();
        assert_eq!(
            record.constructor_arguments,
            Some(ConstructorArguments::Values(vec![json!(1), json!("a")]))
        );
    }

    #[test]
    fn current_key_wins_over_legacy_key() {
        let record: ContractRecord = serde_json::from_value(json!({
            "constructorArguments": ["new"],
            "constructorArgs": ["old"],
        }))
        .unwrap();
        assert_eq!(
            record.constructor_arguments,
            Some(ConstructorArguments::Values(vec![json!("new")]))
        );
    }

    #[test]
    fn rejects_scalar_arguments() {
        let err = serde_json::from_value::<ContractRecord>(json!({ "constructorArguments": 7 }))
            .unwrap_err();
        assert!(err.to_string().contains("list or a hex string"));
    }

    #[test]
    fn preencoded_arguments() {
        let record: ContractRecord =
            serde_json::from_value(json!({ "constructorArguments": "0xdeadbeef" })).unwrap();
        assert_eq!(
            record.constructor_arguments,
            Some(ConstructorArguments::Encoded("0xdeadbeef".into()))
        );
    }

    #[test]
    fn empty_or_null_address_is_absent() {
        let empty: ContractRecord = serde_json::from_value(json!({ "address": "" })).unwrap();
        let null: ContractRecord = serde_json::from_value(json!({ "address": null })).unwrap();
        assert_eq!(empty.address(), None);
        assert_eq!(null.address(), None);
    }

    #[test]
    fn address_match_ignores_case() {
        let record = ContractRecord {
            address: Some("0xAbCd".into()),
            ..Default::default()
        };
        assert!(record.matches_address("0xabcd"));
        assert!(record.matches_address("0XABCD"));
        assert!(!record.matches_address("0xabce"));
    }
}
