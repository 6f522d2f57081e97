// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colours for progress and summary output.

use anstyle::{AnsiColor, Effects, Style};

pub const GREY: Style = AnsiColor::BrightBlack.on_default();
pub const MINT: Style = AnsiColor::BrightGreen.on_default();
pub const PINK: Style = AnsiColor::BrightMagenta.on_default();
pub const RED: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const YELLOW: Style = AnsiColor::Yellow.on_default();

pub trait Color {
    fn paint(&self, style: Style) -> String;

    fn grey(&self) -> String {
        self.paint(GREY)
    }

    fn mint(&self) -> String {
        self.paint(MINT)
    }

    fn pink(&self) -> String {
        self.paint(PINK)
    }

    fn red(&self) -> String {
        self.paint(RED)
    }

    fn yellow(&self) -> String {
        self.paint(YELLOW)
    }
}

impl<T: AsRef<str> + ?Sized> Color for T {
    fn paint(&self, style: Style) -> String {
        format!("{style}{}{style:#}", self.as_ref())
    }
}
