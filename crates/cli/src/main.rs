/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod cfg;
mod data_lake;
mod generate_shell_complete;
mod measurement;
mod owner;
mod private_endpoint;
mod whitelist;

use clap::Parser;
use store::Profile;
use tracing_subscriber::EnvFilter;

use crate::cfg::cli_options::CliOptions;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::prompt::TerminalPrompter;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = CliOptions::parse();
    let profile = Profile::load(&opts.profile)?;
    tracing::debug!(profile = %opts.profile, "loaded configuration profile");
    let ctx = RuntimeContext {
        profile,
        config: RuntimeConfig {
            format: opts.output,
        },
        prompter: Box::new(TerminalPrompter),
    };

    opts.cmd.dispatch(ctx).await?;
    Ok(())
}
