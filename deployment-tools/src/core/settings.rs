// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiler settings that must match the original deployment build.

pub const DEFAULT_OPTIMIZER_RUNS: u32 = 100;
pub const DEFAULT_SOLC_VERSION: &str = "0.8.19";
pub const DEFAULT_EVM_VERSION: &str = "cancun";

/// Settings applied to every verification call of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerSettings {
    pub optimizer: bool,
    pub optimizer_runs: u32,
    /// Semantic version without the leading `v`.
    pub solc_version: String,
    /// Named EVM hardfork, e.g. `cancun`.
    pub evm_version: String,
}

impl CompilerSettings {
    pub fn new(
        optimizer: bool,
        optimizer_runs: u32,
        solc_version: impl AsRef<str>,
        evm_version: impl Into<String>,
    ) -> Self {
        let solc_version = solc_version.as_ref();
        Self {
            optimizer,
            optimizer_runs,
            solc_version: solc_version
                .strip_prefix('v')
                .unwrap_or(solc_version)
                .to_owned(),
            evm_version: evm_version.into(),
        }
    }

    /// Version string as `forge` expects it.
    pub fn compiler_version(&self) -> String {
        format!("v{}", self.solc_version)
    }
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self::new(
            true,
            DEFAULT_OPTIMIZER_RUNS,
            DEFAULT_SOLC_VERSION,
            DEFAULT_EVM_VERSION,
        )
    }
}
