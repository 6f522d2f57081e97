// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ABI type inference for plain constructor arguments.

use std::fmt;

use serde_json::Value;

use super::{plain_text, ConstructorArgs, EncodingError};
use crate::core::toolchain::Toolchain;

/// Length of a `0x`-prefixed address.
const ADDRESS_LEN: usize = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbiType {
    Bool,
    Address,
    Bytes,
    Uint256,
    String,
}

impl AbiType {
    pub fn as_str(self) -> &'static str {
        match self {
            AbiType::Bool => "bool",
            AbiType::Address => "address",
            AbiType::Bytes => "bytes",
            AbiType::Uint256 => "uint256",
            AbiType::String => "string",
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess the ABI type of `value` and render it the way `cast abi-encode` takes it.
///
/// Hex strings are classified by length alone, so a short or long "address" becomes `bytes`.
pub fn infer(value: &Value) -> (AbiType, String) {
    match value {
        Value::Bool(b) => (AbiType::Bool, b.to_string()),
        Value::String(s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
            (AbiType::Bool, s.to_ascii_lowercase())
        }
        Value::String(s) if s.starts_with("0x") => {
            let ty = if s.len() == ADDRESS_LEN {
                AbiType::Address
            } else {
                AbiType::Bytes
            };
            (ty, s.clone())
        }
        Value::Number(_) | Value::String(_) if is_digits(&plain_text(value)) => {
            (AbiType::Uint256, plain_text(value))
        }
        other => {
            let escaped = plain_text(other).replace('"', "\\\"");
            (AbiType::String, format!("\"{escaped}\""))
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `constructor(...)` signature for a list of inferred types.
pub fn signature(types: &[AbiType]) -> String {
    let types: Vec<_> = types.iter().map(|ty| ty.as_str()).collect();
    format!("constructor({})", types.join(","))
}

pub fn encode(args: &[Value], toolchain: &impl Toolchain) -> Result<ConstructorArgs, EncodingError> {
    let (types, values): (Vec<_>, Vec<_>) = args.iter().map(infer).unzip();
    let signature = signature(&types);
    debug!(@grey, "encoding {signature} {}", values.join(" "));
    match toolchain.abi_encode(&signature, &values) {
        Ok(encoded) => Ok(ConstructorArgs::Encoded(encoded)),
        Err(source) => Err(EncodingError::Command {
            signature,
            values,
            source,
        }),
    }
}
