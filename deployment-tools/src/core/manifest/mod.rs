// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment manifests written by the deploy scripts.
//!
//! A manifest is a JSON object with one entry per contract [`Group`]. Each group maps a key
//! (usually the contract name) to a [`ContractRecord`]. Entries keep the order they have in the
//! file, which is the order they get verified in.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};

pub use group::Group;
pub use record::{ConstructorArguments, ContractRecord};

mod group;
mod record;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read deployment file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deployment file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid entry {key:?} in {group}: {source}")]
    Record {
        group: Group,
        key: String,
        source: serde_json::Error,
    },
}

/// All contract groups of a deployment, in verification order.
#[derive(Debug, Default)]
pub struct Manifest {
    groups: Vec<(Group, Vec<(String, ContractRecord)>)>,
}

#[derive(Deserialize)]
struct RawManifest {
    core: Option<Map<String, Value>>,
    vaults: Option<Map<String, Value>>,
    #[serde(rename = "rewardManagers")]
    reward_managers: Option<Map<String, Value>>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ManifestError> {
        let mut raw: RawManifest = serde_json::from_str(contents)?;
        let mut groups = Vec::with_capacity(Group::ORDER.len());
        for group in Group::ORDER {
            let entries = match group {
                Group::Core => raw.core.take(),
                Group::Vaults => raw.vaults.take(),
                Group::RewardManagers => raw.reward_managers.take(),
            };
            let Some(entries) = entries else {
                continue;
            };
            let records: Vec<(String, ContractRecord)> = entries
                .into_iter()
                .map(|(key, value)| match serde_json::from_value::<ContractRecord>(value) {
                    Ok(record) => Ok((key, record)),
                    Err(source) => Err(ManifestError::Record { group, key, source }),
                })
                .collect::<Result<_, _>>()?;
            groups.push((group, records));
        }
        Ok(Self { groups })
    }

    /// Groups present in the manifest, in [`Group::ORDER`].
    pub fn groups(&self) -> impl Iterator<Item = (Group, &[(String, ContractRecord)])> {
        self.groups
            .iter()
            .map(|(group, records)| (*group, records.as_slice()))
    }

    /// Every entry, group by group.
    pub fn entries(&self) -> impl Iterator<Item = (Group, &str, &ContractRecord)> {
        self.groups().flat_map(|(group, records)| {
            records
                .iter()
                .map(move |(key, record)| (group, key.as_str(), record))
        })
    }
}
