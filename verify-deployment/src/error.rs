// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type VerifyDeploymentResult = Result<(), VerifyDeploymentError>;

#[derive(Debug)]
pub struct VerifyDeploymentError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl VerifyDeploymentError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for VerifyDeploymentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<eyre::Error> for VerifyDeploymentError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<deployment_tools::Error> for VerifyDeploymentError {
    fn from(err: deployment_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
