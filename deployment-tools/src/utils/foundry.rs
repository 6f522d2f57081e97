// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run `forge` and `cast` from the Foundry toolchain.

use std::{
    ffi::OsString,
    process::{Command, Stdio},
};

use super::{color::Color, sys};
use crate::{
    core::{message::ProcessOutput, toolchain::Toolchain},
    error::{CommandError, CommandFailure},
};

const LINK: &str = "https://book.getfoundry.sh/getting-started/installation";

pub const FORGE_PROGRAM: &str = "forge";
pub const CAST_PROGRAM: &str = "cast";

#[derive(Clone, Debug)]
pub struct Foundry {
    forge: OsString,
    cast: OsString,
}

impl Foundry {
    pub fn new(forge: impl Into<OsString>, cast: impl Into<OsString>) -> Self {
        Self {
            forge: forge.into(),
            cast: cast.into(),
        }
    }

    /// Make sure both binaries can be run before starting a batch.
    pub fn check_exists(&self) -> Result<(), ToolchainError> {
        for program in [&self.forge, &self.cast] {
            if !sys::command_exists(program) {
                return Err(ToolchainError::CommandDoesNotExist(
                    program.to_string_lossy().into_owned(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for Foundry {
    fn default() -> Self {
        Self::new(FORGE_PROGRAM, CAST_PROGRAM)
    }
}

impl Toolchain for Foundry {
    fn abi_encode(&self, signature: &str, values: &[String]) -> Result<String, CommandError> {
        let output = Command::new(&self.cast)
            .arg("abi-encode")
            .arg(signature)
            .args(values)
            .stdin(Stdio::null())
            .output()?;
        let stdout = CommandFailure::check("cast abi-encode", output)?;
        Ok(stdout.trim().to_owned())
    }

    fn verify_contract(&self, args: &[String]) -> Result<ProcessOutput, CommandError> {
        let output = Command::new(&self.forge)
            .arg("verify-contract")
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(ProcessOutput::capture("forge verify-contract", output))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("{0} not found. Please see\n{link}", link = LINK.red())]
    CommandDoesNotExist(String),
}
