/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;
use store::cli::{OutputFormat, StratoCliResult};
use store::config::DEFAULT_PROFILE;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::{
    data_lake, generate_shell_complete, measurement, owner, private_endpoint, whitelist,
};

pub const BIN_NAME: &str = "stratocli";

#[derive(Parser, Debug)]
#[clap(
    name = "stratocli",
    version,
    about = "Manage StratoDB projects from the command line."
)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "STRATOCLI_PROFILE",
        default_value = DEFAULT_PROFILE,
        help = "Configuration profile to use."
    )]
    pub profile: String,

    #[clap(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format."
    )]
    pub output: OutputFormat,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(
        subcommand,
        about = "Manage the IP whitelist of a project.",
        visible_alias = "whitelists"
    )]
    Whitelist(whitelist::Cmd),

    #[clap(
        subcommand,
        about = "Manage private endpoints of a project.",
        visible_alias = "private-endpoints"
    )]
    PrivateEndpoint(private_endpoint::Cmd),

    #[clap(
        subcommand,
        about = "Manage data lakes of a project.",
        visible_aliases = ["datalakes", "data-lake"]
    )]
    Datalake(data_lake::Cmd),

    #[clap(
        subcommand,
        about = "Provision the owner of a self-managed deployment."
    )]
    Owner(owner::Cmd),

    #[clap(
        subcommand,
        about = "Query monitoring measurements.",
        visible_alias = "measurements"
    )]
    Measurement(measurement::Cmd),

    #[clap(about = "Generate shell completion scripts.")]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

impl Dispatch for Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> StratoCliResult<()> {
        match self {
            Cmd::Whitelist(cmd) => cmd.dispatch(ctx).await,
            Cmd::PrivateEndpoint(cmd) => cmd.dispatch(ctx).await,
            Cmd::Datalake(cmd) => cmd.dispatch(ctx).await,
            Cmd::Owner(cmd) => cmd.dispatch(ctx).await,
            Cmd::Measurement(cmd) => cmd.dispatch(ctx).await,
            Cmd::GenerateShellComplete(cmd) => cmd.dispatch(ctx).await,
        }
    }
}
