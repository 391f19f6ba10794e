/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List the private endpoints of a project.", visible_alias = "ls")]
    List(ListPrivateEndpoints),

    #[clap(about = "Show one private endpoint connection.", visible_alias = "get")]
    Describe(PrivateEndpointQuery),

    #[clap(about = "Create a new private endpoint connection.")]
    Create(CreatePrivateEndpoint),

    #[clap(about = "Delete a private endpoint connection.", visible_alias = "rm")]
    Delete(PrivateEndpointQuery),

    #[clap(
        subcommand,
        about = "Manage interface endpoints attached to a private endpoint.",
        visible_alias = "interfaces"
    )]
    Interface(InterfaceCmd),
}

#[derive(Parser, Debug)]
pub enum InterfaceCmd {
    #[clap(about = "Attach an interface endpoint to a private endpoint.")]
    Create(InterfaceEndpointQuery),

    #[clap(about = "Show one attached interface endpoint.", visible_alias = "get")]
    Describe(InterfaceEndpointQuery),

    #[clap(about = "Detach an interface endpoint.", visible_alias = "rm")]
    Delete(InterfaceEndpointQuery),
}

#[derive(Parser, Debug)]
pub struct ListPrivateEndpoints {
    #[clap(long, default_value_t = 0, help = "Page of results to return.")]
    pub page: usize,

    #[clap(long, default_value_t = 0, help = "Number of results per page.")]
    pub limit: usize,

    #[clap(long, help = "Project to list endpoints for.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PrivateEndpointQuery {
    #[clap(help = "ID of the private endpoint connection.")]
    pub private_link_id: String,

    #[clap(long, help = "Project the endpoint belongs to.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CreatePrivateEndpoint {
    #[clap(long, help = "Cloud provider hosting the endpoint service.")]
    pub provider: String,

    #[clap(long, help = "Provider region to create the endpoint in.")]
    pub region: String,

    #[clap(long, help = "Project the endpoint belongs to.")]
    pub project_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InterfaceEndpointQuery {
    #[clap(help = "ID of the private endpoint connection.")]
    pub private_link_id: String,

    #[clap(help = "ID of the customer interface endpoint.")]
    pub interface_endpoint_id: String,

    #[clap(long, help = "Project the endpoint belongs to.")]
    pub project_id: Option<String>,
}
