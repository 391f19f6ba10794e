/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use api_model::ListOptions;
use api_model::measurement::MeasurementOptions;
use prettytable::{Table, row};
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};
use store::process_disk_measurements::{ProcessDiskMeasurementsLister, ProcessDisksLister};

pub async fn list_disks(
    project_id: &str,
    host: &str,
    port: u16,
    opts: &ListOptions,
    format: OutputFormat,
    store: &impl ProcessDisksLister,
) -> StratoCliResult<()> {
    let disks = store.process_disks(project_id, host, port, opts).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&disks)?);
        return Ok(());
    }

    if disks.results.is_empty() {
        println!("No disks found for process {host}:{port}");
        return Err(StratoCliError::Empty);
    }

    let mut table = Table::new();
    table.set_titles(row!["Partition Name"]);
    for disk in &disks.results {
        table.add_row(row![disk.partition_name]);
    }
    table.printstd();
    Ok(())
}

pub async fn describe_disk(
    project_id: &str,
    host: &str,
    port: u16,
    partition: &str,
    opts: &MeasurementOptions,
    format: OutputFormat,
    store: &impl ProcessDiskMeasurementsLister,
) -> StratoCliResult<()> {
    let measurements = store
        .process_disk_measurements(project_id, host, port, partition, opts)
        .await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&measurements)?);
        return Ok(());
    }

    if measurements.measurements.is_empty() {
        println!("No measurements found for partition {partition}");
        return Err(StratoCliError::Empty);
    }

    let mut table = Table::new();
    table.set_titles(row!["Name", "Units", "Data Points"]);
    for measurement in &measurements.measurements {
        table.add_row(row![
            measurement.name,
            measurement.units.as_deref().unwrap_or_default(),
            measurement.data_points.len().to_string(),
        ]);
    }
    table.printstd();
    Ok(())
}
