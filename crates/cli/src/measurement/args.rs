/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List the disk partitions of a database process.")]
    Disks(ListProcessDisks),

    #[clap(about = "Show measurements for one disk partition.")]
    Disk(DescribeDiskMeasurements),
}

#[derive(Parser, Debug)]
pub struct ListProcessDisks {
    #[clap(help = "Hostname of the database process.")]
    pub hostname: String,

    #[clap(help = "Port of the database process.")]
    pub port: u16,

    #[clap(long, default_value_t = 0, help = "Page of results to return.")]
    pub page: usize,

    #[clap(long, default_value_t = 0, help = "Number of results per page.")]
    pub limit: usize,

    #[clap(long, help = "Project the process belongs to.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DescribeDiskMeasurements {
    #[clap(help = "Hostname of the database process.")]
    pub hostname: String,

    #[clap(help = "Port of the database process.")]
    pub port: u16,

    #[clap(help = "Disk partition to fetch measurements for.")]
    pub partition: String,

    #[clap(
        long,
        default_value = "PT1M",
        help = "ISO 8601 duration between data points."
    )]
    pub granularity: String,

    #[clap(long, help = "ISO 8601 duration bounding the measurement window.")]
    pub period: Option<String>,

    #[clap(long, default_value_t = 0, help = "Page of results to return.")]
    pub page: usize,

    #[clap(long, default_value_t = 0, help = "Number of results per page.")]
    pub limit: usize,

    #[clap(long, help = "Project the process belongs to.")]
    pub project_id: Option<String>,
}
