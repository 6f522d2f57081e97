// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::process::Output;

/// Captured result of running an external tool to completion.
#[derive(Clone, Debug, Default)]
pub struct ProcessOutput {
    pub process_name: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn capture(process_name: impl Into<String>, output: Output) -> Self {
        Self {
            process_name: process_name.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }

    /// A process killed by a signal has no exit code and did not succeed.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Prefers stderr, which is where the Foundry tools report errors.
    pub fn diagnostics(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}
