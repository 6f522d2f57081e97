// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use crate::{
    core::{
        batch::{self, BatchError, BatchReport},
        manifest::Manifest,
        settings::CompilerSettings,
        verification::Verifier,
    },
    utils::foundry::Foundry,
    Result,
};

/// Everything a verification run needs besides the toolchain.
#[derive(Debug)]
pub struct VerifyConfig {
    pub deployment_file: PathBuf,
    pub chain_id: u64,
    pub api_key: String,
    pub settings: CompilerSettings,
    pub delay: Duration,
    pub address: Option<String>,
}

/// Verify the contracts listed in a deployment file and print a summary.
///
/// Individual verification failures end up in the returned report; only an unreadable
/// manifest or a missing toolchain is an error.
pub fn verify_deployment(config: &VerifyConfig, foundry: &Foundry) -> Result<BatchReport> {
    let manifest = Manifest::load(&config.deployment_file)?;
    foundry.check_exists()?;

    let verifier = Verifier::builder()
        .toolchain(foundry)
        .chain_id(config.chain_id)
        .api_key(config.api_key.as_str())
        .settings(&config.settings)
        .build();

    match batch::run(&manifest, &verifier, config.delay, config.address.as_deref()) {
        Ok(report) => {
            report.print_summary();
            Ok(report)
        }
        Err(err @ BatchError::AddressNotFound(_)) => {
            egreyln!("Error: {err}");
            Ok(BatchReport::default())
        }
    }
}
