/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Mutex;

use api_model::ListOptions;
use api_model::whitelist::{ProjectIpWhitelist, ProjectIpWhitelists};
use async_trait::async_trait;
use clap::Parser;
use store::cli::{OutputFormat, StratoCliError};
use store::errors::StoreResult;
use store::whitelist::{WhitelistCreator, WhitelistLister};

use super::args::{Cmd, EntryType};
use super::cmds;

#[derive(Parser, Debug)]
struct TestParser {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[test]
fn create_defaults_to_ip_address_type() {
    let parsed = TestParser::try_parse_from(["whitelist", "create", "192.0.2.1"])
        .expect("should parse a bare entry");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };
    assert_eq!(args.entry, "192.0.2.1");
    assert_eq!(args.entry_type, EntryType::IpAddress);
    assert!(args.comment.is_none());
}

#[test]
fn create_accepts_wire_style_type_names() {
    let parsed = TestParser::try_parse_from([
        "whitelist",
        "create",
        "10.0.0.0/24",
        "--type",
        "cidrBlock",
        "--comment",
        "office",
    ])
    .expect("should parse the cidrBlock type");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };
    assert_eq!(args.entry_type, EntryType::CidrBlock);
    assert_eq!(args.comment.as_deref(), Some("office"));
}

#[test]
fn create_rejects_unknown_type_names() {
    // Rust-style kebab-case is not a valid spelling; only the wire
    // names are accepted.
    TestParser::try_parse_from(["whitelist", "create", "10.0.0.0/24", "--type", "cidr-block"])
        .expect_err("should reject a non-wire type name");
}

#[test]
fn new_entry_populates_exactly_one_field() {
    let parsed = TestParser::try_parse_from([
        "whitelist",
        "create",
        "sg-1234",
        "--type",
        "awsSecurityGroup",
    ])
    .expect("should parse");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };

    let entry = cmds::new_whitelist_entry(&args, "5f1a");
    assert_eq!(entry.group_id.as_deref(), Some("5f1a"));
    assert_eq!(entry.aws_security_group.as_deref(), Some("sg-1234"));
    assert!(entry.ip_address.is_none());
    assert!(entry.cidr_block.is_none());
}

struct RecordingCreator {
    seen: Mutex<Vec<ProjectIpWhitelist>>,
}

#[async_trait]
impl WhitelistCreator for RecordingCreator {
    async fn create_project_ip_whitelist(
        &self,
        entry: &ProjectIpWhitelist,
    ) -> StoreResult<ProjectIpWhitelists> {
        self.seen.lock().unwrap().push(entry.clone());
        Ok(ProjectIpWhitelists {
            results: vec![entry.clone()],
            total_count: 1,
        })
    }
}

#[tokio::test]
async fn create_calls_the_store_once_with_the_typed_field() {
    let parsed = TestParser::try_parse_from(["whitelist", "create", "192.0.2.1"])
        .expect("should parse");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };

    let store = RecordingCreator {
        seen: Mutex::new(Vec::new()),
    };
    cmds::create(&args, "5f1a", OutputFormat::Table, &store)
        .await
        .expect("create should succeed");

    let seen = store.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].group_id.as_deref(), Some("5f1a"));
    assert_eq!(seen[0].ip_address.as_deref(), Some("192.0.2.1"));
    assert!(seen[0].cidr_block.is_none());
    assert!(seen[0].aws_security_group.is_none());
}

struct EmptyLister;

#[async_trait]
impl WhitelistLister for EmptyLister {
    async fn project_ip_whitelists(
        &self,
        _project_id: &str,
        _opts: &ListOptions,
    ) -> StoreResult<ProjectIpWhitelists> {
        Ok(ProjectIpWhitelists::default())
    }
}

#[tokio::test]
async fn list_without_results_is_empty_error() {
    let err = cmds::list("5f1a", &ListOptions::default(), OutputFormat::Table, &EmptyLister)
        .await
        .expect_err("an empty listing should surface as an error");
    assert!(matches!(err, StratoCliError::Empty));
}
