// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Map contract names to the `path:Contract` identifiers `forge` verifies against.

/// Source locations that do not follow the `src/<Name>.sol` convention, or that several
/// deployment names share.
pub const CONTRACT_PATHS: &[(&str, &str)] = &[
    // core
    ("LinearInterestRateModelV3", "lib/core-v3/contracts/pool/LinearInterestRateModelV3.sol:LinearInterestRateModelV3"),
    ("ACL", "lib/core-v2/contracts/core/ACL.sol:ACL"),
    // reward managers
    ("RewardManager", "src/pendle-rewards/RewardManager.sol:RewardManager"),
    ("RewardManagerSpectra", "src/spectra-rewards/RewardManagerSpectra.sol:RewardManagerSpectra"),
    // spectra
    ("CDPVaultSpectra", "src/CDPVaultSpectra.sol:CDPVaultSpectra"),
    ("CDPVault_Vaults_deUSD", "src/CDPVaultSpectra.sol:CDPVaultSpectra"),
    ("SpectraYnETHOracle", "src/oracle/SpectraYnETHOracle.sol:SpectraYnETHOracle"),
    // system
    ("AddressProviderV3", "src/AddressProviderV3.sol:AddressProviderV3"),
    ("ContractsRegister", "src/ContractsRegister.sol:ContractsRegister"),
    ("PoolV3", "src/PoolV3.sol:PoolV3"),
    ("VaultRegistry", "src/VaultRegistry.sol:VaultRegistry"),
    ("CDPVault", "src/vaults/CDPVault.sol:CDPVault"),
    ("Treasury", "src/Treasury.sol:Treasury"),
    ("PoolQuotaKeeperV3", "src/quotas/PoolQuotaKeeperV3.sol:PoolQuotaKeeperV3"),
    // proxy actions
    ("BaseAction", "src/proxy/BaseAction.sol:BaseAction"),
    ("ERC165Plugin", "src/proxy/ERC165Plugin.sol:ERC165Plugin"),
    ("PoolAction", "src/proxy/PoolAction.sol:PoolAction"),
    ("PositionAction", "src/proxy/PositionAction.sol:PositionAction"),
    ("PositionAction20", "src/proxy/PositionAction20.sol:PositionAction20"),
    ("PositionAction4626", "src/proxy/PositionAction4626.sol:PositionAction4626"),
    ("PositionActionPendle", "src/proxy/PositionActionPendle.sol:PositionActionPendle"),
    ("PositionActionPenpie", "src/proxy/PositionActionPenpie.sol:PositionActionPenpie"),
    ("PositionActionTranchess", "src/proxy/PositionActionTranchess.sol:PositionActionTranchess"),
    ("SwapAction", "src/proxy/SwapAction.sol:SwapAction"),
    ("TransferAction", "src/proxy/TransferAction.sol:TransferAction"),
    ("Flashlender", "src/Flashlender.sol:Flashlender"),
    ("PRBProxyRegistry", "src/proxy/PRBProxyRegistry.sol:PRBProxyRegistry"),
    // staking and locking
    ("StakingLPEth", "src/StakingLPEth.sol:StakingLPEth"),
    ("Locking", "src/Locking.sol:Locking"),
    // voter and gauge
    ("LoopVoter", "src/quotas/LoopVoter.sol:LoopVoter"),
    ("GaugeV3", "src/quotas/GaugeV3.sol:GaugeV3"),
    // oracles
    ("PendleLPOracleRate", "src/oracle/PendleLPOracleRate.sol:PendleLPOracleRate"),
    ("MockOracle", "src/oracle/MockOracle.sol:MockOracle"),
    ("ChainlinkCurveOracle", "src/oracle/ChainlinkCurveOracle.sol:ChainlinkCurveOracle"),
    ("Combined4626AggregatorV3Oracle", "src/oracle/Combined4626AggregatorV3Oracle.sol:Combined4626AggregatorV3Oracle"),
    ("CombinedAggregatorV3Oracle", "src/oracle/CombinedAggregatorV3Oracle.sol:CombinedAggregatorV3Oracle"),
];

/// Contract name of an artifact identifier: the part after the last `:`, if any.
pub fn contract_name(artifact: &str) -> &str {
    artifact.rsplit(':').next().unwrap_or(artifact)
}

pub fn override_path(contract_name: &str) -> Option<&'static str> {
    CONTRACT_PATHS
        .iter()
        .find(|(name, _)| *name == contract_name)
        .map(|(_, path)| *path)
}

/// Resolve the `path:Contract` identifier for a contract.
///
/// The override table wins, then an artifact that already names its path, then the
/// `src/<artifact>.sol:<artifact>` convention. Nothing here checks that the file exists.
pub fn resolve(contract_name: &str, artifact: &str) -> String {
    if let Some(path) = override_path(contract_name) {
        path.to_owned()
    } else if artifact.contains(':') {
        artifact.to_owned()
    } else {
        format!("src/{artifact}.sol:{artifact}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_everything() {
        assert_eq!(resolve("PoolV3", "PoolV3"), "src/PoolV3.sol:PoolV3");
        assert_eq!(
            resolve("CDPVault_Vaults_deUSD", "custom/Vault.sol:CDPVault_Vaults_deUSD"),
            "src/CDPVaultSpectra.sol:CDPVaultSpectra"
        );
        assert_eq!(
            resolve("ACL", "lib/other/ACL.sol:ACL"),
            "lib/core-v2/contracts/core/ACL.sol:ACL"
        );
    }

    #[test]
    fn qualified_artifact_is_used_verbatim() {
        assert_eq!(
            resolve("Widget", "src/misc/Widget.sol:Widget"),
            "src/misc/Widget.sol:Widget"
        );
    }

    #[test]
    fn default_convention() {
        assert_eq!(resolve("Widget", "Widget"), "src/Widget.sol:Widget");
    }

    #[test]
    fn contract_name_from_artifact() {
        assert_eq!(contract_name("src/a/Foo.sol:Foo"), "Foo");
        assert_eq!(contract_name("Foo"), "Foo");
        assert_eq!(contract_name("a:b:Bar"), "Bar");
    }

    #[test]
    fn table_has_no_duplicate_names() {
        let mut names: Vec<_> = CONTRACT_PATHS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CONTRACT_PATHS.len());
        assert!(CONTRACT_PATHS.iter().all(|(_, path)| path.contains(':')));
    }
}
