/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create the first user of a self-managed deployment.")]
    Create(CreateOwner),
}

#[derive(Parser, Debug)]
pub struct CreateOwner {
    #[clap(long, help = "Email address of the owner; doubles as the username.")]
    pub email: String,

    #[clap(
        short,
        long,
        help = "Password for the owner. Prompted for interactively when omitted."
    )]
    pub password: Option<String>,

    #[clap(long, help = "First name of the owner.")]
    pub first_name: String,

    #[clap(long, help = "Last name of the owner.")]
    pub last_name: String,

    #[clap(
        long = "whitelist-ip",
        help = "IP address granted API access. Repeat for multiple addresses."
    )]
    pub whitelist_ips: Vec<String>,
}
