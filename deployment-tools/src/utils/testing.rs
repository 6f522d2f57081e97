// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Recording toolchain for unit tests.

use std::cell::RefCell;

use crate::{
    core::{message::ProcessOutput, toolchain::Toolchain},
    error::{CommandError, CommandFailure},
};

pub const SUCCESS_OUTPUT: &str = "Submitted contract for verification\nContract successfully verified\nSuccessfully verified";

#[derive(Default)]
pub struct MockToolchain {
    /// `None` makes every `cast abi-encode` call fail.
    pub encoded: Option<String>,
    pub verify_output: ProcessOutput,
    pub encode_calls: RefCell<Vec<(String, Vec<String>)>>,
    pub verify_calls: RefCell<Vec<Vec<String>>>,
}

impl MockToolchain {
    pub fn verifying() -> Self {
        Self::with_output(0, SUCCESS_OUTPUT, "")
    }

    pub fn rejecting(stderr: &str) -> Self {
        Self::with_output(1, "", stderr)
    }

    pub fn with_output(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            encoded: Some("0xencoded".into()),
            verify_output: ProcessOutput {
                process_name: "forge verify-contract".into(),
                stdout: stdout.into(),
                stderr: stderr.into(),
                exit_code: Some(exit_code),
            },
            ..Default::default()
        }
    }

    pub fn encoding(encoded: Option<&str>) -> Self {
        Self {
            encoded: encoded.map(Into::into),
            ..Self::verifying()
        }
    }
}

impl Toolchain for MockToolchain {
    fn abi_encode(&self, signature: &str, values: &[String]) -> Result<String, CommandError> {
        self.encode_calls
            .borrow_mut()
            .push((signature.to_owned(), values.to_vec()));
        self.encoded.clone().ok_or_else(|| {
            CommandFailure::from(ProcessOutput {
                process_name: "cast abi-encode".into(),
                stderr: "error: could not encode".into(),
                exit_code: Some(1),
                ..Default::default()
            })
            .into()
        })
    }

    fn verify_contract(&self, args: &[String]) -> Result<ProcessOutput, CommandError> {
        self.verify_calls.borrow_mut().push(args.to_vec());
        Ok(self.verify_output.clone())
    }
}
