// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor arguments of Spectra vaults.
//!
//! `CDPVaultSpectra` and the `CDPVault_*` deployments built from it take a collateral struct and
//! a parameters struct. Both are static tuples, so their ABI encoding is just every field as a
//! 32-byte word, which is what the manual fallback produces when `cast` refuses the input.

use alloy_primitives::{Address, U256};
use serde_json::Value;

use super::{plain_text, ConstructorArgs, EncodingError};
use crate::core::toolchain::Toolchain;

pub const SIGNATURE: &str = "constructor((address,address,address,uint256),(uint128,uint64,uint64,uint64,address,address,address))";

const SPECTRA_VAULT: &str = "CDPVaultSpectra";
const VAULT_DEPLOYMENT_PREFIX: &str = "CDPVault_";

/// Zero padding in front of a 20-byte address inside a 32-byte word.
const ADDRESS_PADDING: &str = "000000000000000000000000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Address,
    Uint(usize),
}

/// `(pool, oracle, token, tokenScale)`
const COLLATERAL: [Field; 4] = [Field::Address, Field::Address, Field::Address, Field::Uint(256)];

/// `(debtFloor, liquidationRatio, liquidationPenalty, liquidationDiscount, roleAdmin, vaultAdmin, pauseAdmin)`
const PARAMS: [Field; 7] = [
    Field::Uint(128),
    Field::Uint(64),
    Field::Uint(64),
    Field::Uint(64),
    Field::Address,
    Field::Address,
    Field::Address,
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FallbackError {
    #[error("expected {expected} fields in the {name} struct, found {found}")]
    FieldCount {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid address {0:?}")]
    Address(String),
    #[error("invalid uint{bits} value {value:?}")]
    Uint { bits: usize, value: String },
}

pub fn matches_name(contract_name: &str) -> bool {
    contract_name == SPECTRA_VAULT || contract_name.starts_with(VAULT_DEPLOYMENT_PREFIX)
}

/// Render struct fields as a `cast` tuple literal, e.g. `(0xabc,0xdef,1)`.
pub fn tuple_literal(fields: &[Value]) -> String {
    let fields: Vec<_> = fields.iter().map(plain_text).collect();
    format!("({})", fields.join(","))
}

pub fn encode(
    collateral: &[Value],
    params: &[Value],
    toolchain: &impl Toolchain,
) -> Result<ConstructorArgs, EncodingError> {
    let values = [tuple_literal(collateral), tuple_literal(params)];
    greyln!("Running encode command: cast abi-encode {SIGNATURE} {}", values.join(" "));
    match toolchain.abi_encode(SIGNATURE, &values) {
        Ok(encoded) => Ok(ConstructorArgs::Encoded(encoded)),
        Err(err) => {
            warn!(@yellow, "error encoding struct arguments: {err}");
            warn!(@yellow, "args: {} {}", values[0], values[1]);
            warn!(@yellow, "error output: {}", err.details().trim());
            info!(@grey, "attempting fallback encoding");
            let data = manual_encoding(collateral, params)?;
            Ok(ConstructorArgs::Data(data))
        }
    }
}

/// Lay out both structs word by word, in declaration order.
pub fn manual_encoding(collateral: &[Value], params: &[Value]) -> Result<String, FallbackError> {
    let mut out = String::from("0x");
    for (name, layout, values) in [
        ("collateral", COLLATERAL.as_slice(), collateral),
        ("params", PARAMS.as_slice(), params),
    ] {
        if layout.len() != values.len() {
            return Err(FallbackError::FieldCount {
                name,
                expected: layout.len(),
                found: values.len(),
            });
        }
        for (field, value) in layout.iter().zip(values) {
            out.push_str(&encode_word(*field, value)?);
        }
    }
    Ok(out)
}

fn encode_word(field: Field, value: &Value) -> Result<String, FallbackError> {
    let text = plain_text(value);
    match field {
        Field::Address => {
            let address = text
                .strip_prefix("0x")
                .filter(|digits| digits.len() == 40)
                .and_then(|_| text.parse::<Address>().ok())
                .ok_or_else(|| FallbackError::Address(text.clone()))?;
            Ok(format!("{ADDRESS_PADDING}{}", hex::encode(address.as_slice())))
        }
        Field::Uint(bits) => {
            let invalid = || FallbackError::Uint {
                bits,
                value: text.clone(),
            };
            if text.is_empty() {
                return Err(invalid());
            }
            let number = text.parse::<U256>().map_err(|_| invalid())?;
            if number.bit_len() > bits {
                return Err(invalid());
            }
            Ok(hex::encode(number.to_be_bytes::<32>()))
        }
    }
}
