/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use api_model::data_lake::{DataLake, DataLakeCreateRequest};
use prettytable::{Table, row};
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};
use store::data_lakes::{DataLakeCreator, DataLakeDescriber, DataLakeLister};

pub async fn list(
    project_id: &str,
    format: OutputFormat,
    store: &impl DataLakeLister,
) -> StratoCliResult<()> {
    let lakes = store.data_lakes(project_id).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&lakes)?);
        return Ok(());
    }

    if lakes.is_empty() {
        println!("No data lakes found");
        return Err(StratoCliError::Empty);
    }

    print_data_lake_table(&lakes);
    Ok(())
}

pub async fn describe(
    project_id: &str,
    name: &str,
    format: OutputFormat,
    store: &impl DataLakeDescriber,
) -> StratoCliResult<()> {
    let lake = store.data_lake(project_id, name).await?;
    print_data_lake(&lake, format)
}

pub async fn create(
    project_id: &str,
    name: &str,
    format: OutputFormat,
    store: &impl DataLakeCreator,
) -> StratoCliResult<()> {
    let request = DataLakeCreateRequest {
        name: name.to_string(),
    };
    let lake = store.create_data_lake(project_id, &request).await?;
    print_data_lake(&lake, format)
}

fn print_data_lake(lake: &DataLake, format: OutputFormat) -> StratoCliResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(lake)?);
        return Ok(());
    }
    print_data_lake_table(std::slice::from_ref(lake));
    Ok(())
}

fn print_data_lake_table(lakes: &[DataLake]) {
    let mut table = Table::new();
    table.set_titles(row!["Name", "State", "Hostnames"]);
    for lake in lakes {
        table.add_row(row![
            lake.name,
            lake.state.as_deref().unwrap_or_default(),
            lake.hostnames.join(", "),
        ]);
    }
    table.printstd();
}
