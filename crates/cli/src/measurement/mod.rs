/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use api_model::ListOptions;
use api_model::measurement::MeasurementOptions;
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
            Cmd::Disks(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                let opts = ListOptions::new(args.page, args.limit);
                cmds::list_disks(&project_id, &args.hostname, args.port, &opts, format, &store)
                    .await
            }
            Cmd::Disk(args) => {
                let project_id = ctx.project_id(args.project_id.as_deref())?;
                let opts = MeasurementOptions {
                    granularity: args.granularity.clone(),
                    period: args.period.clone(),
                    list: ListOptions::new(args.page, args.limit),
                };
                cmds::describe_disk(
                    &project_id,
                    &args.hostname,
                    args.port,
                    &args.partition,
                    &opts,
                    format,
                    &store,
                )
                .await
            }
        }
    }
}
