// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

macro_rules! log_painted {
    ($level:ident, $color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        log::$level!("{}", format!($($msg),*).$color())
    }};
}

macro_rules! debug {
    (@$color:ident, $($msg:expr),*) => { log_painted!(debug, $color, $($msg),*) };
}

macro_rules! info {
    (@$color:ident, $($msg:expr),*) => { log_painted!(info, $color, $($msg),*) };
}

macro_rules! warn {
    (@$color:ident, $($msg:expr),*) => { log_painted!(warn, $color, $($msg),*) };
}

/// Progress output on stdout, independent of the log level.
macro_rules! greyln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        println!("{}", format!($($msg),*).grey())
    }};
}

macro_rules! egreyln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        eprintln!("{}", format!($($msg),*).grey())
    }};
}
