// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

pub mod color;
pub mod foundry;
pub mod sys;

#[cfg(test)]
pub(crate) mod testing;
