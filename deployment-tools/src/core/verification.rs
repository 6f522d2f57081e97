// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Verify a single deployed contract with `forge verify-contract`.

use typed_builder::TypedBuilder;

use crate::{
    core::{
        encoding::{self, ConstructorArgs, EncodingError},
        identity,
        manifest::ConstructorArguments,
        message::ProcessOutput,
        settings::CompilerSettings,
        toolchain::Toolchain,
    },
    utils::sys,
};

/// Printed by `forge` once the explorer accepts the sources.
pub const SUCCESS_MARKER: &str = "Successfully verified";

const API_KEY_FLAG: &str = "--etherscan-api-key";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified { output: String },
    Failed { output: String },
}

impl VerificationStatus {
    /// Only the success marker counts; a clean exit without it is still a failure.
    pub fn classify(output: &ProcessOutput) -> Self {
        if !output.success() {
            return Self::Failed {
                output: output.stderr.clone(),
            };
        }
        if sys::strip_color(&output.stdout).contains(SUCCESS_MARKER) {
            Self::Verified {
                output: output.stdout.clone(),
            }
        } else {
            Self::Failed {
                output: output.stdout.clone(),
            }
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    pub fn output(&self) -> &str {
        match self {
            Self::Verified { output } | Self::Failed { output } => output,
        }
    }
}

/// Verifies contracts of one chain with fixed compiler settings.
/// After setting the parameters, call [`Verifier::verify`] once per contract.
#[derive(TypedBuilder)]
pub struct Verifier<'a, T> {
    toolchain: T,
    #[builder(default = 1)]
    chain_id: u64,
    #[builder(setter(into))]
    api_key: String,
    settings: &'a CompilerSettings,
}

impl<T: Toolchain> Verifier<'_, T> {
    /// Verify the contract built from `artifact` that lives at `address`.
    ///
    /// Constructor arguments that cannot be encoded are dropped with a warning; the explorer
    /// will most likely reject the attempt, which then shows up as a failure.
    pub fn verify(
        &self,
        address: &str,
        artifact: &str,
        arguments: Option<&ConstructorArguments>,
    ) -> VerificationStatus {
        let name = identity::contract_name(artifact);
        let path = identity::resolve(name, artifact);
        let constructor_args = self.constructor_args(name, arguments);
        let args = self.command_args(address, &path, &constructor_args);

        info!(@grey, "Verifying {name} at {address}...");
        greyln!("Command: forge verify-contract {}", redact_api_key(&args).join(" "));

        match self.toolchain.verify_contract(&args) {
            Ok(output) => {
                println!("{}", output.stdout);
                let status = VerificationStatus::classify(&output);
                if !status.is_verified() {
                    warn!(@yellow, "Error verifying {name}");
                    if !output.stderr.is_empty() {
                        egreyln!("{}", output.stderr);
                    }
                }
                status
            }
            Err(err) => {
                warn!(@yellow, "Error verifying {name}: {err}");
                VerificationStatus::Failed {
                    output: err.to_string(),
                }
            }
        }
    }

    fn constructor_args(
        &self,
        name: &str,
        arguments: Option<&ConstructorArguments>,
    ) -> ConstructorArgs {
        match encoding::encode_arguments(arguments, name, &self.toolchain) {
            Ok(args) => args,
            Err(err) => {
                warn!(@yellow, "Error: could not encode constructor arguments for {name}: {err}");
                if let EncodingError::Command { source, .. } = &err {
                    warn!(@yellow, "Error output: {}", source.details().trim());
                }
                ConstructorArgs::None
            }
        }
    }

    /// Arguments to `forge verify-contract`, in the order `forge` documents them.
    pub fn command_args(
        &self,
        address: &str,
        path: &str,
        constructor_args: &ConstructorArgs,
    ) -> Vec<String> {
        let mut args = vec![
            "--chain-id".to_owned(),
            self.chain_id.to_string(),
            "--compiler-version".to_owned(),
            self.settings.compiler_version(),
            "--num-of-optimizations".to_owned(),
            self.settings.optimizer_runs.to_string(),
            "--evm-version".to_owned(),
            self.settings.evm_version.clone(),
            "--watch".to_owned(),
        ];
        args.extend(constructor_args.cli_args());
        args.extend([
            API_KEY_FLAG.to_owned(),
            self.api_key.clone(),
            address.to_owned(),
            path.to_owned(),
        ]);
        args
    }
}

fn redact_api_key(args: &[String]) -> Vec<&str> {
    let mut redacted = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        redacted.push(if hide_next { "<redacted>" } else { arg.as_str() });
        hide_next = arg == API_KEY_FLAG;
    }
    redacted
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::testing::MockToolchain;

    const ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn output(exit_code: i32, stdout: &str, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            process_name: "forge verify-contract".into(),
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    #[test]
    fn classification() {
        assert!(VerificationStatus::classify(&output(0, "Successfully verified", "")).is_verified());
        assert!(VerificationStatus::classify(&output(
            0,
            "Response: OK\n\x1b[32mSuccessfully\x1b[0m verified contract",
            ""
        ))
        .is_verified());
        assert_eq!(
            VerificationStatus::classify(&output(0, "Pending in queue", "")),
            VerificationStatus::Failed {
                output: "Pending in queue".into()
            }
        );
        assert_eq!(
            VerificationStatus::classify(&output(1, "Successfully verified", "boom")),
            VerificationStatus::Failed {
                output: "boom".into()
            }
        );
        assert_eq!(
            VerificationStatus::classify(&output(2, "", "")).output(),
            ""
        );
    }

    #[test]
    fn signalled_process_is_a_failure() {
        let killed = ProcessOutput {
            stdout: SUCCESS_MARKER.into(),
            exit_code: None,
            ..Default::default()
        };
        assert!(!VerificationStatus::classify(&killed).is_verified());
    }

    #[test]
    fn command_line_layout() {
        let settings = CompilerSettings::default();
        let verifier = Verifier::builder()
            .toolchain(MockToolchain::verifying())
            .chain_id(146)
            .api_key("KEY")
            .settings(&settings)
            .build();
        let args = verifier.command_args(
            ADDRESS,
            "src/PoolV3.sol:PoolV3",
            &ConstructorArgs::Encoded("0xabcd".into()),
        );
        assert_eq!(
            args,
            [
                "--chain-id",
                "146",
                "--compiler-version",
                "v0.8.19",
                "--num-of-optimizations",
                "100",
                "--evm-version",
                "cancun",
                "--watch",
                "--constructor-args",
                "0xabcd",
                "--etherscan-api-key",
                "KEY",
                ADDRESS,
                "src/PoolV3.sol:PoolV3",
            ]
        );
    }

    #[test]
    fn optimizer_runs_sent_with_optimizer_disabled() {
        let settings = CompilerSettings::new(false, 200, "0.8.19", "cancun");
        let verifier = Verifier::builder()
            .toolchain(MockToolchain::verifying())
            .api_key("KEY")
            .settings(&settings)
            .build();
        let args = verifier.command_args(ADDRESS, "src/A.sol:A", &ConstructorArgs::None);
        let at = args
            .iter()
            .position(|arg| arg == "--num-of-optimizations")
            .unwrap();
        assert_eq!(args[at + 1], "200");
        assert_eq!(&args[..2], ["--chain-id", "1"]);
    }

    #[test]
    fn verifies_with_resolved_identity_and_encoded_args() {
        let settings = CompilerSettings::default();
        let toolchain = MockToolchain::verifying();
        let verifier = Verifier::builder()
            .toolchain(&toolchain)
            .api_key("KEY")
            .settings(&settings)
            .build();
        let args = ConstructorArguments::Values(vec![json!(ADDRESS), json!("5")]);
        let status = verifier.verify(ADDRESS, "Treasury", Some(&args));
        assert!(status.is_verified());

        let calls = toolchain.verify_calls.borrow();
        let call = &calls[0];
        assert_eq!(call[call.len() - 2..], [ADDRESS, "src/Treasury.sol:Treasury"]);
        let at = call.iter().position(|arg| arg == "--constructor-args").unwrap();
        assert_eq!(call[at + 1], "0xencoded");
        assert_eq!(
            toolchain.encode_calls.borrow()[0].0,
            "constructor(address,uint256)"
        );
    }

    #[test]
    fn encoding_failure_drops_constructor_args() {
        let settings = CompilerSettings::default();
        let toolchain = MockToolchain::encoding(None);
        let verifier = Verifier::builder()
            .toolchain(&toolchain)
            .api_key("KEY")
            .settings(&settings)
            .build();
        let args = ConstructorArguments::Values(vec![json!("x")]);
        verifier.verify(ADDRESS, "Widget", Some(&args));

        let calls = toolchain.verify_calls.borrow();
        assert!(!calls[0]
            .iter()
            .any(|arg| arg.starts_with("--constructor-args")));
    }

    #[test]
    fn rejection_keeps_stderr() {
        let settings = CompilerSettings::default();
        let verifier = Verifier::builder()
            .toolchain(MockToolchain::rejecting("Bytecode does not match"))
            .api_key("KEY")
            .settings(&settings)
            .build();
        assert_eq!(
            verifier.verify(ADDRESS, "src/x/Thing.sol:Thing", None),
            VerificationStatus::Failed {
                output: "Bytecode does not match".into()
            }
        );
    }

    #[test]
    fn api_key_is_redacted() {
        let args: Vec<String> = ["--watch", "--etherscan-api-key", "SECRET", "0x1"]
            .map(String::from)
            .to_vec();
        assert_eq!(
            redact_api_key(&args),
            ["--watch", "--etherscan-api-key", "<redacted>", "0x1"]
        );
    }
}
