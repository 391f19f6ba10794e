/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use api_model::owner::User;
use store::cli::{OutputFormat, StratoCliResult};
use store::owners::OwnerCreator;

use crate::cfg::prompt::SecretPrompt;
use crate::owner::args::CreateOwner;

pub const CREATED_TEMPLATE: &str = "Owner successfully created.";

pub async fn create(
    args: &CreateOwner,
    store: &impl OwnerCreator,
    prompter: &dyn SecretPrompt,
    format: OutputFormat,
) -> StratoCliResult<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompter.password("Password: ")?,
    };

    let user = User {
        username: args.email.clone(),
        password: Some(password),
        first_name: Some(args.first_name.clone()),
        last_name: Some(args.last_name.clone()),
        email_address: Some(args.email.clone()),
    };

    let response = store.create_owner(&user, &args.whitelist_ips).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{CREATED_TEMPLATE}");
    if let Some(api_key) = &response.api_key {
        println!("Personal API Key: {api_key}");
    }
    if let Some(keys) = &response.programmatic_api_key {
        println!("Public API Key: {}", keys.public_key);
        println!("Private API Key: {}", keys.private_key);
    }
    Ok(())
}
