/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

#[test]
fn parse_each_supported_shell() {
    let cmd = Cmd::try_parse_from(["generate-shell-complete", "bash"]).expect("should parse bash");
    assert!(matches!(cmd.shell, Shell::Bash));

    let cmd = Cmd::try_parse_from(["generate-shell-complete", "fish"]).expect("should parse fish");
    assert!(matches!(cmd.shell, Shell::Fish));

    let cmd = Cmd::try_parse_from(["generate-shell-complete", "zsh"]).expect("should parse zsh");
    assert!(matches!(cmd.shell, Shell::Zsh));
}

#[test]
fn parse_missing_shell_fails() {
    let result = Cmd::try_parse_from(["generate-shell-complete"]);
    assert!(result.is_err(), "should fail without shell subcommand");
}

#[test]
fn parse_unknown_shell_fails() {
    let result = Cmd::try_parse_from(["generate-shell-complete", "powershell"]);
    assert!(result.is_err(), "should fail with unknown shell");
}
