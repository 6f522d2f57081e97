// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use deployment_tools::ops::{self, VerifyConfig};

use crate::{
    common_args::{ApiKeyArgs, CompilerArgs, ToolchainArgs},
    constants::{DEFAULT_CHAIN_ID, DEFAULT_DELAY_SECS},
    error::VerifyDeploymentResult,
};

#[derive(Debug, clap::Args)]
#[group(id = "VerifyArgs")]
pub struct Args {
    /// Path to deployment JSON file
    deployment_file: PathBuf,
    /// Chain ID (default: 1 for Ethereum mainnet)
    #[arg(long, default_value_t = DEFAULT_CHAIN_ID)]
    chain_id: u64,
    /// Delay between verifications in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    delay: u64,
    /// Verify only the contract at this address
    #[arg(long)]
    address: Option<String>,

    #[command(flatten)]
    api_key: ApiKeyArgs,
    #[command(flatten)]
    compiler: CompilerArgs,
    #[command(flatten)]
    toolchain: ToolchainArgs,
}

pub fn exec(args: Args) -> VerifyDeploymentResult {
    // Resolved before any other work
    let api_key = args.api_key.api_key()?;

    let config = VerifyConfig {
        deployment_file: args.deployment_file,
        chain_id: args.chain_id,
        api_key,
        settings: args.compiler.settings(),
        delay: Duration::from_secs(args.delay),
        address: args.address,
    };
    ops::verify_deployment(&config, &args.toolchain.foundry())?;
    Ok(())
}
