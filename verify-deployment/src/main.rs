// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `verify-deployment`.

use std::process::ExitCode;

use clap::Parser;

mod common_args;
mod constants;
mod error;
mod utils;
mod verify;

#[derive(Debug, Parser)]
#[command(name = "verify-deployment")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Verify deployed contracts on Etherscan using Forge", long_about = None)]
#[command(version)]
struct Args {
    #[command(flatten)]
    verify: verify::Args,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Verification failures are reported in the summary and do not change the exit code
    match verify::exec(args.verify) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
