// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use super::ContractRecord;

/// Name reported for reward managers that carry no `vaultName`.
pub const REWARD_MANAGER: &str = "RewardManager";

/// Top-level section of a deployment manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Core,
    Vaults,
    RewardManagers,
}

impl Group {
    /// Order groups are scanned and verified in.
    pub const ORDER: [Group; 3] = [Group::Core, Group::Vaults, Group::RewardManagers];

    pub fn key(self) -> &'static str {
        match self {
            Group::Core => "core",
            Group::Vaults => "vaults",
            Group::RewardManagers => "rewardManagers",
        }
    }

    /// Artifact to verify against when the record does not name one.
    pub fn default_artifact(self, key: &str) -> &str {
        match self {
            Group::Core | Group::Vaults => key,
            // Reward managers are keyed by vault address.
            Group::RewardManagers => REWARD_MANAGER,
        }
    }

    /// Name the outcome of verifying `record` is reported under.
    ///
    /// Reward managers without a `vaultName` all share [`REWARD_MANAGER`], so later outcomes
    /// replace earlier ones in the report.
    pub fn report_name<'a>(self, key: &'a str, record: &'a ContractRecord) -> &'a str {
        match self {
            Group::Core | Group::Vaults => key,
            Group::RewardManagers => record.vault_name.as_deref().unwrap_or(REWARD_MANAGER),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}
