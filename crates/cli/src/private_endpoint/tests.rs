/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

use super::args::{Cmd, InterfaceCmd};

#[derive(Parser, Debug)]
struct TestParser {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[test]
fn create_requires_provider_and_region() {
    TestParser::try_parse_from(["private-endpoint", "create", "--provider", "AWS"])
        .expect_err("create without --region should fail");

    let parsed = TestParser::try_parse_from([
        "private-endpoint",
        "create",
        "--provider",
        "AWS",
        "--region",
        "us-east-1",
    ])
    .expect("should parse with both flags");
    let Cmd::Create(args) = parsed.cmd else {
        panic!("expected a create command");
    };
    assert_eq!(args.provider, "AWS");
    assert_eq!(args.region, "us-east-1");
}

#[test]
fn interface_commands_take_both_ids_positionally() {
    let parsed = TestParser::try_parse_from([
        "private-endpoint",
        "interface",
        "create",
        "link-123",
        "vpce-456",
    ])
    .expect("should parse both positional IDs");
    let Cmd::Interface(InterfaceCmd::Create(args)) = parsed.cmd else {
        panic!("expected an interface create command");
    };
    assert_eq!(args.private_link_id, "link-123");
    assert_eq!(args.interface_endpoint_id, "vpce-456");

    TestParser::try_parse_from(["private-endpoint", "interface", "describe", "link-123"])
        .expect_err("a lone private link ID should fail");
}

#[test]
fn delete_takes_the_link_id() {
    let parsed = TestParser::try_parse_from(["private-endpoint", "rm", "link-123"])
        .expect("should parse via the rm alias");
    let Cmd::Delete(args) = parsed.cmd else {
        panic!("expected a delete command");
    };
    assert_eq!(args.private_link_id, "link-123");
}
