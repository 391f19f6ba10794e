/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use clap::Parser;
use store::cli::{OutputFormat, StratoCliError};
use store::data_lakes::DataLakeLister;
use store::errors::StoreResult;

use super::args::Cmd;
use super::cmds;

#[derive(Parser, Debug)]
struct TestParser {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[test]
fn create_and_describe_take_a_name() {
    let parsed = TestParser::try_parse_from(["datalake", "create", "sales"])
        .expect("should parse the lake name");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };
    assert_eq!(args.name, "sales");

    TestParser::try_parse_from(["datalake", "describe"])
        .expect_err("describe without a name should fail");
}

#[test]
fn list_accepts_an_explicit_project() {
    let parsed = TestParser::try_parse_from(["datalake", "ls", "--project-id", "5f1a"])
        .expect("should parse via the ls alias");
    let Cmd::List(args) = parsed.cmd else {
        panic!("expected a list command");
    };
    assert_eq!(args.project_id.as_deref(), Some("5f1a"));
}

struct EmptyLister;

#[async_trait]
impl DataLakeLister for EmptyLister {
    async fn data_lakes(&self, _project_id: &str) -> StoreResult<Vec<api_model::data_lake::DataLake>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn list_without_results_is_empty_error() {
    let err = cmds::list("5f1a", OutputFormat::Table, &EmptyLister)
        .await
        .expect_err("an empty listing should surface as an error");
    assert!(matches!(err, StratoCliError::Empty));
}
