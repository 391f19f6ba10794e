/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;

use clap::CommandFactory;
use store::cli::StratoCliResult;

use super::args::Shell;
use crate::cfg::cli_options::{BIN_NAME, CliOptions};

pub fn generate(shell: Shell) -> StratoCliResult<()> {
    let mut cmd = CliOptions::command();
    match shell {
        Shell::Bash => {
            clap_complete::generate(
                clap_complete::shells::Bash,
                &mut cmd,
                BIN_NAME,
                &mut io::stdout(),
            );
        }
        Shell::Fish => {
            clap_complete::generate(
                clap_complete::shells::Fish,
                &mut cmd,
                BIN_NAME,
                &mut io::stdout(),
            );
        }
        Shell::Zsh => {
            clap_complete::generate(
                clap_complete::shells::Zsh,
                &mut cmd,
                BIN_NAME,
                &mut io::stdout(),
            );
        }
    }
    Ok(())
}
