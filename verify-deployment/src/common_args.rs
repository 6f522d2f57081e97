// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use clap::ArgAction;
use deployment_tools::{
    core::settings::{
        CompilerSettings, DEFAULT_EVM_VERSION, DEFAULT_OPTIMIZER_RUNS, DEFAULT_SOLC_VERSION,
    },
    utils::foundry::{Foundry, CAST_PROGRAM, FORGE_PROGRAM},
};
use eyre::eyre;

use crate::constants::API_KEY_ENV;

#[derive(Debug, clap::Args)]
pub struct ApiKeyArgs {
    /// Etherscan API key (or set ETHERSCAN_API_KEY env variable)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    etherscan_key: Option<String>,
}

impl ApiKeyArgs {
    pub fn api_key(&self) -> eyre::Result<String> {
        self.etherscan_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                eyre!("Etherscan API key required. Provide with --etherscan-key or set {API_KEY_ENV} env variable.")
            })
    }
}

#[derive(Debug, clap::Args)]
pub struct CompilerArgs {
    /// Enable optimizer
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
    )]
    optimizer: bool,
    /// Optimizer runs
    #[arg(long, default_value_t = DEFAULT_OPTIMIZER_RUNS)]
    optimizer_runs: u32,
    /// Solidity compiler version
    #[arg(long, default_value = DEFAULT_SOLC_VERSION)]
    solc_version: String,
    /// EVM version
    #[arg(long, default_value = DEFAULT_EVM_VERSION)]
    evm_version: String,
}

impl CompilerArgs {
    pub fn settings(&self) -> CompilerSettings {
        CompilerSettings::new(
            self.optimizer,
            self.optimizer_runs,
            &self.solc_version,
            self.evm_version.clone(),
        )
    }
}

#[derive(Debug, clap::Args)]
pub struct ToolchainArgs {
    /// Path to the forge binary
    #[arg(long, env = "FORGE_PATH", default_value = FORGE_PROGRAM)]
    forge: String,
    /// Path to the cast binary
    #[arg(long, env = "CAST_PATH", default_value = CAST_PROGRAM)]
    cast: String,
}

impl ToolchainArgs {
    pub fn foundry(&self) -> Foundry {
        Foundry::new(&self.forge, &self.cast)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        compiler: CompilerArgs,
        #[command(flatten)]
        key: ApiKeyArgs,
    }

    #[test]
    fn compiler_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.compiler.settings(), CompilerSettings::default());
    }

    #[test]
    fn optimizer_flag_forms() {
        let cli = Cli::parse_from(["test", "--optimizer"]);
        assert!(cli.compiler.settings().optimizer);
        let cli = Cli::parse_from(["test", "--optimizer", "false"]);
        assert!(!cli.compiler.settings().optimizer);
    }

    #[test]
    fn compiler_overrides() {
        let cli = Cli::parse_from([
            "test",
            "--optimizer-runs",
            "999",
            "--solc-version",
            "v0.8.24",
            "--evm-version",
            "paris",
        ]);
        assert_eq!(
            cli.compiler.settings(),
            CompilerSettings::new(true, 999, "0.8.24", "paris")
        );
    }

    #[test]
    fn explicit_key_wins() {
        let cli = Cli::parse_from(["test", "--etherscan-key", "ABC"]);
        assert_eq!(cli.key.api_key().unwrap(), "ABC");
    }

    #[test]
    fn empty_key_is_missing() {
        let args = ApiKeyArgs {
            etherscan_key: Some(String::new()),
        };
        assert!(args.api_key().is_err());
        let args = ApiKeyArgs {
            etherscan_key: None,
        };
        assert!(args.api_key().is_err());
    }
}
