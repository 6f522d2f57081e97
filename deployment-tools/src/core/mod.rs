// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod batch;
pub mod encoding;
pub mod identity;
pub mod manifest;
pub mod message;
pub mod settings;
pub mod toolchain;
pub mod verification;
