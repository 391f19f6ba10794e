/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Add an entry to the project IP whitelist.")]
    Create(CreateWhitelistEntry),

    #[clap(about = "List the entries of the project IP whitelist.", visible_alias = "ls")]
    List(ListWhitelistEntries),

    #[clap(about = "Show one whitelist entry.", visible_alias = "get")]
    Describe(WhitelistEntryQuery),

    #[clap(about = "Remove an entry from the project IP whitelist.", visible_alias = "rm")]
    Delete(WhitelistEntryQuery),
}

/// Wire names of the whitelist entry kinds, matching the JSON field
/// each one populates.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryType {
    #[value(name = "ipAddress")]
    #[default]
    IpAddress,
    #[value(name = "cidrBlock")]
    CidrBlock,
    #[value(name = "awsSecurityGroup")]
    AwsSecurityGroup,
}

#[derive(Parser, Debug)]
pub struct CreateWhitelistEntry {
    #[clap(help = "IP address, CIDR block, or AWS security group ID to whitelist.")]
    pub entry: String,

    #[clap(
        long = "type",
        value_enum,
        default_value_t = EntryType::IpAddress,
        help = "Kind of entry being whitelisted."
    )]
    pub entry_type: EntryType,

    #[clap(long, help = "Free-form comment stored with the entry.")]
    pub comment: Option<String>,

    #[clap(
        long,
        help = "ISO 8601 timestamp after which the entry expires."
    )]
    pub delete_after: Option<String>,

    #[clap(long, help = "Project the entry belongs to.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListWhitelistEntries {
    #[clap(long, default_value_t = 0, help = "Page of results to return.")]
    pub page: usize,

    #[clap(long, default_value_t = 0, help = "Number of results per page.")]
    pub limit: usize,

    #[clap(long, help = "Project to list entries for.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct WhitelistEntryQuery {
    #[clap(help = "Whitelist entry value, exactly as stored.")]
    pub entry: String,

    #[clap(long, help = "Project the entry belongs to.")]
    pub project_id: Option<String>,
}
