// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment variable the Etherscan API key is read from when `--etherscan-key` is absent.
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Chain verified against by default (Ethereum mainnet).
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Seconds to wait between verification requests.
pub const DEFAULT_DELAY_SECS: u64 = 5;
