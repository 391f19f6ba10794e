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
        let store = Store::new(&ctx.profile)?;
        let format = ctx.config.format;
        match self {
            Cmd::List(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::list(&project_id, format, &store).await
            }
            Cmd::Describe(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::describe(&project_id, &args.name, format, &store).await
            }
            Cmd::Create(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::create(&project_id, &args.name, format, &store).await
            }
        }
    }
}
