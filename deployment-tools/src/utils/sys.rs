// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::OsStr,
    process::{Command, Stdio},
    sync::OnceLock,
};

use regex::Regex;

pub fn command_exists(program: impl AsRef<OsStr>) -> bool {
    Command::new(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .arg("--version")
        .output()
        .map(|x| x.status.success())
        .unwrap_or_default()
}

/// Remove ANSI escape sequences from tool output.
pub fn strip_color(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9;]*[ABCDHJKSTfGmsu]").expect("ANSI escape pattern is valid")
    });
    re.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_escape_codes() {
        assert_eq!(
            strip_color("\x1b[32mSuccessfully\x1b[0m verified"),
            "Successfully verified"
        );
        assert_eq!(strip_color("plain"), "plain");
    }

    #[test]
    fn missing_program() {
        assert!(!command_exists("definitely-not-a-real-program-4a1f"));
    }
}
