// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::message::ProcessOutput;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Toolchain(#[from] crate::utils::foundry::ToolchainError),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    CommandFailure(#[from] CommandFailure),
}

impl CommandError {
    /// Whatever the failed process had to say for itself.
    pub fn details(&self) -> String {
        match self {
            Self::Io(err) => err.to_string(),
            Self::CommandFailure(failure) => failure.output().diagnostics().to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{process} failed (exit code: {code:?})", process = .0.process_name, code = .0.exit_code)]
pub struct CommandFailure(ProcessOutput);

impl CommandFailure {
    pub fn check(
        process_name: impl Into<String>,
        output: std::process::Output,
    ) -> Result<String, Self> {
        let process_output = ProcessOutput::capture(process_name, output);
        if process_output.success() {
            Ok(process_output.stdout)
        } else {
            Err(CommandFailure(process_output))
        }
    }

    pub fn output(&self) -> &ProcessOutput {
        &self.0
    }
}

#[cfg(test)]
impl From<ProcessOutput> for CommandFailure {
    fn from(output: ProcessOutput) -> Self {
        Self(output)
    }
}
