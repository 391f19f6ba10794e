/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cell::Cell;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use api_model::owner::{CreateUserResponse, User};
use async_trait::async_trait;
use clap::Parser;
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};
use store::errors::StoreResult;
use store::owners::OwnerCreator;
use store::{Profile, Service};

use super::args::Cmd;
use super::cmds;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::prompt::SecretPrompt;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};

#[derive(Parser, Debug)]
struct TestParser {
    #[clap(subcommand)]
    cmd: Cmd,
}

fn parse_create(argv: &[&str]) -> super::args::CreateOwner {
    let parsed = TestParser::try_parse_from(argv).expect("should parse");
    let Cmd::Create(args) = parsed.cmd;
    args
}

#[test]
fn create_requires_email_and_names() {
    TestParser::try_parse_from(["owner", "create", "--email", "a@b.com"])
        .expect_err("create without names should fail");

    let args = parse_create(&[
        "owner",
        "create",
        "--email",
        "a@b.com",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
        "--whitelist-ip",
        "192.0.2.1",
        "--whitelist-ip",
        "192.0.2.2",
    ]);
    assert_eq!(args.email, "a@b.com");
    assert!(args.password.is_none());
    assert_eq!(args.whitelist_ips, ["192.0.2.1", "192.0.2.2"]);
}

struct RecordingCreator {
    seen: Mutex<Vec<(User, Vec<String>)>>,
}

impl RecordingCreator {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OwnerCreator for RecordingCreator {
    async fn create_owner(
        &self,
        user: &User,
        whitelist_ips: &[String],
    ) -> StoreResult<CreateUserResponse> {
        self.seen
            .lock()
            .unwrap()
            .push((user.clone(), whitelist_ips.to_vec()));
        Ok(CreateUserResponse {
            api_key: Some("key-123".to_string()),
            ..Default::default()
        })
    }
}

struct CountingPrompter {
    calls: Cell<usize>,
    answer: StratoCliResult<String>,
}

impl SecretPrompt for CountingPrompter {
    fn password(&self, _message: &str) -> StratoCliResult<String> {
        self.calls.set(self.calls.get() + 1);
        match &self.answer {
            Ok(password) => Ok(password.clone()),
            Err(_) => Err(StratoCliError::GenericError("prompt aborted".to_string())),
        }
    }
}

#[tokio::test]
async fn prompts_once_when_password_missing() {
    let args = parse_create(&[
        "owner",
        "create",
        "--email",
        "a@b.com",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
    ]);
    let store = RecordingCreator::new();
    let prompter = CountingPrompter {
        calls: Cell::new(0),
        answer: Ok("hunter2".to_string()),
    };

    cmds::create(&args, &store, &prompter, OutputFormat::Table)
        .await
        .expect("create should succeed");

    assert_eq!(prompter.calls.get(), 1);
    let seen = store.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.password.as_deref(), Some("hunter2"));
    assert_eq!(seen[0].0.username, "a@b.com");
}

#[tokio::test]
async fn flag_password_skips_the_prompt() {
    let args = parse_create(&[
        "owner",
        "create",
        "--email",
        "a@b.com",
        "-p",
        "fromflag",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
    ]);
    let store = RecordingCreator::new();
    let prompter = CountingPrompter {
        calls: Cell::new(0),
        answer: Ok("unused".to_string()),
    };

    cmds::create(&args, &store, &prompter, OutputFormat::Table)
        .await
        .expect("create should succeed");

    assert_eq!(prompter.calls.get(), 0);
    let seen = store.seen.lock().unwrap();
    assert_eq!(seen[0].0.password.as_deref(), Some("fromflag"));
}

#[tokio::test]
async fn prompt_failure_prevents_the_create() {
    let args = parse_create(&[
        "owner",
        "create",
        "--email",
        "a@b.com",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
    ]);
    let store = RecordingCreator::new();
    let prompter = CountingPrompter {
        calls: Cell::new(0),
        answer: Err(StratoCliError::GenericError("prompt aborted".to_string())),
    };

    cmds::create(&args, &store, &prompter, OutputFormat::Table)
        .await
        .expect_err("an aborted prompt should fail the command");

    assert!(store.seen.lock().unwrap().is_empty());
}

struct SharedCountPrompter {
    calls: std::sync::Arc<AtomicUsize>,
}

impl SecretPrompt for SharedCountPrompter {
    fn password(&self, _message: &str) -> StratoCliResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("unused".to_string())
    }
}

// A server profile without a base URL cannot build a store; the
// prompt must never run after a failed init.
#[tokio::test]
async fn failed_store_init_short_circuits_the_prompt() {
    let parsed = TestParser::try_parse_from([
        "owner",
        "create",
        "--email",
        "a@b.com",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
    ])
    .expect("should parse");

    let calls = std::sync::Arc::new(AtomicUsize::new(0));
    let ctx = RuntimeContext {
        profile: Profile {
            service: Service::Server,
            ..Default::default()
        },
        config: RuntimeConfig {
            format: OutputFormat::Table,
        },
        prompter: Box::new(SharedCountPrompter {
            calls: std::sync::Arc::clone(&calls),
        }),
    };

    parsed
        .cmd
        .dispatch(ctx)
        .await
        .expect_err("store init should fail without a base URL");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
