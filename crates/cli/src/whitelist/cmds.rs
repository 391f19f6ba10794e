/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use api_model::ListOptions;
use api_model::whitelist::ProjectIpWhitelist;
use prettytable::{Table, row};
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};
use store::whitelist::{WhitelistCreator, WhitelistDeleter, WhitelistDescriber, WhitelistLister};

use crate::whitelist::args::{CreateWhitelistEntry, EntryType};

pub const CREATED_TEMPLATE: &str = "Created new IP whitelist.";

/// Builds the wire entry for a create request. Exactly one of the
/// entry fields is populated, chosen by `--type`.
pub fn new_whitelist_entry(args: &CreateWhitelistEntry, project_id: &str) -> ProjectIpWhitelist {
    let mut entry = ProjectIpWhitelist {
        group_id: Some(project_id.to_string()),
        comment: args.comment.clone(),
        delete_after_date: args.delete_after.clone(),
        ..Default::default()
    };
    match args.entry_type {
        EntryType::IpAddress => entry.ip_address = Some(args.entry.clone()),
        EntryType::CidrBlock => entry.cidr_block = Some(args.entry.clone()),
        EntryType::AwsSecurityGroup => entry.aws_security_group = Some(args.entry.clone()),
    }
    entry
}

pub async fn create(
    args: &CreateWhitelistEntry,
    project_id: &str,
    format: OutputFormat,
    store: &impl WhitelistCreator,
) -> StratoCliResult<()> {
    let entry = new_whitelist_entry(args, project_id);
    let whitelist = store.create_project_ip_whitelist(&entry).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&whitelist)?);
        return Ok(());
    }

    println!("{CREATED_TEMPLATE}");
    print_whitelist_table(&whitelist.results);
    Ok(())
}

pub async fn list(
    project_id: &str,
    opts: &ListOptions,
    format: OutputFormat,
    store: &impl WhitelistLister,
) -> StratoCliResult<()> {
    let whitelist = store.project_ip_whitelists(project_id, opts).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&whitelist)?);
        return Ok(());
    }

    if whitelist.results.is_empty() {
        println!("No whitelist entries found");
        return Err(StratoCliError::Empty);
    }

    print_whitelist_table(&whitelist.results);
    Ok(())
}

pub async fn describe(
    project_id: &str,
    entry: &str,
    format: OutputFormat,
    store: &impl WhitelistDescriber,
) -> StratoCliResult<()> {
    let found = store.project_ip_whitelist(project_id, entry).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    print_whitelist_table(std::slice::from_ref(&found));
    Ok(())
}

pub async fn delete(
    project_id: &str,
    entry: &str,
    store: &impl WhitelistDeleter,
) -> StratoCliResult<()> {
    store.delete_project_ip_whitelist(project_id, entry).await?;
    println!("Whitelist entry {entry} deleted");
    Ok(())
}

fn print_whitelist_table(entries: &[ProjectIpWhitelist]) {
    let mut table = Table::new();
    table.set_titles(row!["Entry", "Comment", "Delete After"]);
    for entry in entries {
        table.add_row(row![
            entry.entry(),
            entry.comment.as_deref().unwrap_or_default(),
            entry.delete_after_date.as_deref().unwrap_or_default(),
        ]);
    }
    table.printstd();
}
