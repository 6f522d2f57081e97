// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for verifying the contracts listed in a deployment manifest.
//!
//! The heavy lifting is done by the Foundry toolchain: `cast abi-encode` produces constructor
//! arguments and `forge verify-contract` submits sources to the block explorer. This crate
//! decides what to pass to them and keeps score.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;

pub mod utils;

pub use error::{CommandError, CommandFailure, Error, Result};
