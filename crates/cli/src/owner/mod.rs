/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use store::Store;
use store::cli::StratoCliResult;

pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> StratoCliResult<()> {
        // Owner provisioning targets a fresh deployment that has no
        // users yet, so the store carries no credentials.
        let store = Store::new_unauthenticated(&ctx.profile)?;
        match self {
            Cmd::Create(args) => {
                cmds::create(&args, &store, ctx.prompter.as_ref(), ctx.config.format).await
            }
        }
    }
}
