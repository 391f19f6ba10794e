/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List the data lakes of a project.", visible_alias = "ls")]
    List(ListDataLakes),

    #[clap(about = "Show one data lake.", visible_alias = "get")]
    Describe(DataLakeQuery),

    #[clap(about = "Create a new data lake.")]
    Create(DataLakeQuery),
}

#[derive(Parser, Debug)]
pub struct ListDataLakes {
    #[clap(long, help = "Project to list data lakes for.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DataLakeQuery {
    #[clap(help = "Name of the data lake.")]
    pub name: String,

    #[clap(long, help = "Project the data lake belongs to.")]
    pub project_id: Option<String>,
}
