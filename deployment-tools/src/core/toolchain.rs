// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Seam between the verification logic and the external CLIs it drives.
//!
//! [`Foundry`](crate::utils::foundry::Foundry) is the real implementation. Every call blocks
//! until the subprocess exits.

use crate::{core::message::ProcessOutput, error::CommandError};

pub trait Toolchain {
    /// ABI-encode `values` against a `constructor(...)` signature, returning the hex string.
    fn abi_encode(&self, signature: &str, values: &[String]) -> Result<String, CommandError>;

    /// Run the verification command with `args` and capture its output, whatever the exit code.
    fn verify_contract(&self, args: &[String]) -> Result<ProcessOutput, CommandError>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn abi_encode(&self, signature: &str, values: &[String]) -> Result<String, CommandError> {
        (**self).abi_encode(signature, values)
    }

    fn verify_contract(&self, args: &[String]) -> Result<ProcessOutput, CommandError> {
        (**self).verify_contract(args)
    }
}
