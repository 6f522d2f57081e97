// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ABI encoding of constructor arguments recorded in a deployment manifest.
//!
//! The manifest only keeps raw JSON values, so the constructor signature has to be guessed.
//! Most contracts go through [`infer`], which picks an ABI type per value. Spectra-style vaults
//! take two structs that inference cannot express and are handled by [`struct_pair`].

use serde_json::Value;

pub use infer::AbiType;
pub use struct_pair::FallbackError;

use crate::{
    core::{manifest::ConstructorArguments, toolchain::Toolchain},
    error::CommandError,
};

pub mod infer;
pub mod struct_pair;

/// Constructor arguments in the form `forge verify-contract` takes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConstructorArgs {
    #[default]
    None,
    /// Output of `cast abi-encode`, passed as `--constructor-args`.
    Encoded(String),
    /// Hand-built encoding, passed as `--constructor-args-data`.
    Data(String),
}

impl ConstructorArgs {
    pub fn cli_args(&self) -> Vec<String> {
        match self {
            Self::None => vec![],
            Self::Encoded(hex) => vec!["--constructor-args".to_owned(), hex.clone()],
            Self::Data(hex) => vec!["--constructor-args-data".to_owned(), hex.clone()],
        }
    }
}

/// Which encoding algorithm a constructor's arguments need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgumentShape<'a> {
    /// One inferred ABI type per value.
    Generic,
    /// Two tuples, `(collateral, params)`, of a Spectra vault.
    SpectraVaultPair(&'a [Value], &'a [Value]),
}

impl<'a> ArgumentShape<'a> {
    pub fn select(contract_name: &str, args: &'a [Value]) -> Self {
        if !struct_pair::matches_name(contract_name) {
            return Self::Generic;
        }
        match args {
            [Value::Array(collateral), Value::Array(params)] => {
                Self::SpectraVaultPair(collateral, params)
            }
            _ => Self::Generic,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("could not ABI encode {signature} {values}: {source}", values = .values.join(" "))]
    Command {
        signature: String,
        values: Vec<String>,
        source: CommandError,
    },
    #[error("fallback encoding failed: {0}")]
    Fallback(#[from] FallbackError),
}

/// Encode `args` for the constructor of `contract_name`.
///
/// No toolchain call is made for an empty argument list.
pub fn encode(
    args: &[Value],
    contract_name: &str,
    toolchain: &impl Toolchain,
) -> Result<ConstructorArgs, EncodingError> {
    if args.is_empty() {
        return Ok(ConstructorArgs::None);
    }
    match ArgumentShape::select(contract_name, args) {
        ArgumentShape::SpectraVaultPair(collateral, params) => {
            struct_pair::encode(collateral, params, toolchain)
        }
        ArgumentShape::Generic => infer::encode(args, toolchain),
    }
}

/// Encode whatever a manifest record holds, passing pre-encoded strings through.
pub fn encode_arguments(
    arguments: Option<&ConstructorArguments>,
    contract_name: &str,
    toolchain: &impl Toolchain,
) -> Result<ConstructorArgs, EncodingError> {
    match arguments {
        None => Ok(ConstructorArgs::None),
        Some(ConstructorArguments::Encoded(hex)) if hex.is_empty() => Ok(ConstructorArgs::None),
        Some(ConstructorArguments::Encoded(hex)) => Ok(ConstructorArgs::Encoded(hex.clone())),
        Some(ConstructorArguments::Values(values)) => encode(values, contract_name, toolchain),
    }
}

/// A JSON value as it reads when written out bare: strings unquoted, everything else compact.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
