/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

use super::args::Cmd;

#[derive(Parser, Debug)]
struct TestParser {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[test]
fn disks_take_hostname_and_port() {
    let parsed = TestParser::try_parse_from(["measurement", "disks", "db-0.example.com", "27017"])
        .expect("should parse host and port");
    let Cmd::Disks(args) = parsed.cmd else {
        panic!("expected a disks command");
    };
    assert_eq!(args.hostname, "db-0.example.com");
    assert_eq!(args.port, 27017);

    TestParser::try_parse_from(["measurement", "disks", "db-0.example.com", "notaport"])
        .expect_err("a non-numeric port should fail");
}

#[test]
fn disk_defaults_granularity() {
    let parsed = TestParser::try_parse_from([
        "measurement",
        "disk",
        "db-0.example.com",
        "27017",
        "data",
    ])
    .expect("should parse with defaults");
    let Cmd::Disk(args) = parsed.cmd else {
        panic!("expected a disk command");
    };
    assert_eq!(args.partition, "data");
    assert_eq!(args.granularity, "PT1M");
    assert!(args.period.is_none());
}

#[test]
fn disk_accepts_period_and_paging() {
    let parsed = TestParser::try_parse_from([
        "measurement",
        "disk",
        "db-0.example.com",
        "27017",
        "data",
        "--granularity",
        "PT5M",
        "--period",
        "P1D",
        "--page",
        "2",
        "--limit",
        "50",
    ])
    .expect("should parse the full flag set");
    let Cmd::Disk(args) = parsed.cmd else {
        panic!("expected a disk command");
    };
    assert_eq!(args.granularity, "PT5M");
    assert_eq!(args.period.as_deref(), Some("P1D"));
    assert_eq!(args.page, 2);
    assert_eq!(args.limit, 50);
}
