/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use api_model::ListOptions;
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
            Cmd::Create(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::create(&args, &project_id, format, &store).await
            }
            Cmd::List(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                let opts = ListOptions::new(args.page, args.limit);
                cmds::list(&project_id, &opts, format, &store).await
            }
            Cmd::Describe(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::describe(&project_id, &args.entry, format, &store).await
            }
            Cmd::Delete(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                cmds::delete(&project_id, &args.entry, &store).await
            }
        }
    }
}
