// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for `minecraft-colors`.
//!
//! ```text
//! mccolors clean motd.txt
//! echo '&aWelcome!' | mccolors motd
//! mccolors html --css-classes --css-prefix mc- chat.log
//! ```

pub mod cli;
pub mod diagnostic;
pub mod run;
