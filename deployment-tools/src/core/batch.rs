// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Verify every contract of a manifest, one at a time.

use std::{collections::BTreeMap, thread, time::Duration};

use crate::{
    core::{
        manifest::{ContractRecord, Group, Manifest},
        toolchain::Toolchain,
        verification::Verifier,
    },
    utils::color::Color,
};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Contract with address {0} not found in deployment file.")]
    AddressNotFound(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedContract {
    pub address: String,
    pub error: String,
}

/// Outcome of a run, keyed by the name each contract is reported under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub verified: BTreeMap<String, String>,
    pub failed: BTreeMap<String, FailedContract>,
}

impl BatchReport {
    fn verify_one<T: Toolchain>(
        &mut self,
        verifier: &Verifier<T>,
        group: Group,
        key: &str,
        record: &ContractRecord,
        address: &str,
    ) {
        let artifact = record
            .artifact_name
            .as_deref()
            .unwrap_or_else(|| group.default_artifact(key));
        let status = verifier.verify(address, artifact, record.constructor_arguments.as_ref());
        let name = group.report_name(key, record).to_owned();
        if status.is_verified() {
            self.verified.insert(name, address.to_owned());
        } else {
            let failure = FailedContract {
                address: address.to_owned(),
                error: status.output().to_owned(),
            };
            self.failed.insert(name, failure);
        }
    }

    pub fn print_summary(&self) {
        println!("\n--- VERIFICATION SUMMARY ---");
        println!("Verified: {} contracts", self.verified.len());
        for (name, address) in &self.verified {
            println!("✅ {}", format!("{name}: {address}").mint());
        }
        println!("\nFailed: {} contracts", self.failed.len());
        for (name, failure) in &self.failed {
            println!("❌ {}", format!("{name}: {}", failure.address).pink());
        }
    }
}

/// Verify the contracts of `manifest`.
///
/// With an `address_filter`, only the first record at that address is verified and no delay is
/// applied. Otherwise every record with an address is verified in manifest order, sleeping for
/// `delay` after each attempt to stay under the explorer's rate limit.
pub fn run<T: Toolchain>(
    manifest: &Manifest,
    verifier: &Verifier<T>,
    delay: Duration,
    address_filter: Option<&str>,
) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();
    match address_filter {
        Some(filter) => {
            let (group, key, record, address) = manifest
                .entries()
                .find(|(_, _, record)| record.matches_address(filter))
                .and_then(|(group, key, record)| Some((group, key, record, record.address()?)))
                .ok_or_else(|| BatchError::AddressNotFound(filter.to_lowercase()))?;
            report.verify_one(verifier, group, key, record, address);
        }
        None => {
            for (group, key, record) in manifest.entries() {
                let Some(address) = record.address() else {
                    debug!(@grey, "skipping {group}.{key}: no address");
                    continue;
                };
                report.verify_one(verifier, group, key, record, address);
                thread::sleep(delay);
            }
        }
    }
    Ok(report)
}
