/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use api_model::ListOptions;
use api_model::private_endpoint::{InterfaceEndpointConnection, PrivateEndpointConnection};
use prettytable::{Table, row};
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};
use store::private_endpoints::{
    InterfaceEndpointCreator, InterfaceEndpointDeleter, InterfaceEndpointDescriber,
    PrivateEndpointCreator, PrivateEndpointDeleter, PrivateEndpointDescriber,
    PrivateEndpointLister,
};

use crate::private_endpoint::args::CreatePrivateEndpoint;

pub async fn list(
    project_id: &str,
    opts: &ListOptions,
    format: OutputFormat,
    store: &impl PrivateEndpointLister,
) -> StratoCliResult<()> {
    let endpoints = store.private_endpoints(project_id, opts).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&endpoints)?);
        return Ok(());
    }

    if endpoints.is_empty() {
        println!("No private endpoints found");
        return Err(StratoCliError::Empty);
    }

    print_endpoint_table(&endpoints);
    Ok(())
}

pub async fn describe(
    project_id: &str,
    private_link_id: &str,
    format: OutputFormat,
    store: &impl PrivateEndpointDescriber,
) -> StratoCliResult<()> {
    let endpoint = store.private_endpoint(project_id, private_link_id).await?;
    print_endpoint(&endpoint, format)
}

pub async fn create(
    args: &CreatePrivateEndpoint,
    project_id: &str,
    format: OutputFormat,
    store: &impl PrivateEndpointCreator,
) -> StratoCliResult<()> {
    let connection = PrivateEndpointConnection {
        provider_name: Some(args.provider.clone()),
        region: Some(args.region.clone()),
        ..Default::default()
    };
    let endpoint = store.create_private_endpoint(project_id, &connection).await?;
    print_endpoint(&endpoint, format)
}

pub async fn delete(
    project_id: &str,
    private_link_id: &str,
    store: &impl PrivateEndpointDeleter,
) -> StratoCliResult<()> {
    store.delete_private_endpoint(project_id, private_link_id).await?;
    println!("Private endpoint {private_link_id} deleted");
    Ok(())
}

pub async fn create_interface(
    project_id: &str,
    private_link_id: &str,
    interface_endpoint_id: &str,
    format: OutputFormat,
    store: &impl InterfaceEndpointCreator,
) -> StratoCliResult<()> {
    let interface = store
        .create_interface_endpoint(project_id, private_link_id, interface_endpoint_id)
        .await?;
    print_interface(&interface, format)
}

pub async fn describe_interface(
    project_id: &str,
    private_link_id: &str,
    interface_endpoint_id: &str,
    format: OutputFormat,
    store: &impl InterfaceEndpointDescriber,
) -> StratoCliResult<()> {
    let interface = store
        .interface_endpoint(project_id, private_link_id, interface_endpoint_id)
        .await?;
    print_interface(&interface, format)
}

pub async fn delete_interface(
    project_id: &str,
    private_link_id: &str,
    interface_endpoint_id: &str,
    store: &impl InterfaceEndpointDeleter,
) -> StratoCliResult<()> {
    store
        .delete_interface_endpoint(project_id, private_link_id, interface_endpoint_id)
        .await?;
    println!("Interface endpoint {interface_endpoint_id} detached from {private_link_id}");
    Ok(())
}

fn print_endpoint(
    endpoint: &PrivateEndpointConnection,
    format: OutputFormat,
) -> StratoCliResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(endpoint)?);
        return Ok(());
    }
    print_endpoint_table(std::slice::from_ref(endpoint));
    Ok(())
}

fn print_endpoint_table(endpoints: &[PrivateEndpointConnection]) {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Provider", "Region", "Status"]);
    for endpoint in endpoints {
        table.add_row(row![
            endpoint.id.as_deref().unwrap_or_default(),
            endpoint.provider_name.as_deref().unwrap_or_default(),
            endpoint.region.as_deref().unwrap_or_default(),
            endpoint.status.as_deref().unwrap_or_default(),
        ]);
    }
    table.printstd();
}

fn print_interface(
    interface: &InterfaceEndpointConnection,
    format: OutputFormat,
) -> StratoCliResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(interface)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(row!["Interface Endpoint ID", "Status", "Delete Requested"]);
    table.add_row(row![
        interface.interface_endpoint_id.as_deref().unwrap_or_default(),
        interface.connection_status.as_deref().unwrap_or_default(),
        interface.delete_requested.unwrap_or_default().to_string(),
    ]);
    table.printstd();
    Ok(())
}
