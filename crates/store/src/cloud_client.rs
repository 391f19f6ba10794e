/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Thin client for the hosted database service API. One method per
//! resource operation; arguments map straight onto the REST surface.

use api_model::ListOptions;
use api_model::data_lake::{DataLake, DataLakeCreateRequest};
use api_model::private_endpoint::{InterfaceEndpointConnection, PrivateEndpointConnection};
use api_model::whitelist::{ProjectIpWhitelist, ProjectIpWhitelists};

use crate::errors::StoreResult;
use crate::transport::ApiTransport;

#[derive(Debug, Clone)]
pub(crate) struct CloudClient {
    transport: ApiTransport,
}

fn group_path(project_id: &str, suffix: &str) -> String {
    format!("api/cloud/v1/groups/{project_id}/{suffix}")
}

impl CloudClient {
    pub(crate) fn new(
        base_url: &str,
        credentials: Option<(String, String)>,
    ) -> StoreResult<Self> {
        Ok(Self {
            transport: ApiTransport::new(base_url, credentials)?,
        })
    }

    // Whitelists.

    pub(crate) async fn project_ip_whitelists(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<ProjectIpWhitelists> {
        self.transport
            .get_json(&group_path(project_id, "whitelist"), &opts.query())
            .await
    }

    pub(crate) async fn project_ip_whitelist(
        &self,
        project_id: &str,
        entry: &str,
    ) -> StoreResult<ProjectIpWhitelist> {
        // Entries can be CIDR blocks; the slash must not split the path.
        let entry = urlencoding::encode(entry);
        self.transport
            .get_json(&group_path(project_id, &format!("whitelist/{entry}")), &[])
            .await
    }

    pub(crate) async fn create_project_ip_whitelist(
        &self,
        entry: &ProjectIpWhitelist,
    ) -> StoreResult<ProjectIpWhitelists> {
        let project_id = entry.group_id.clone().unwrap_or_default();
        // The API takes a batch; the CLI always sends a single entry.
        self.transport
            .post_json(
                &group_path(&project_id, "whitelist"),
                &[],
                std::slice::from_ref(entry),
            )
            .await
    }

    pub(crate) async fn delete_project_ip_whitelist(
        &self,
        project_id: &str,
        entry: &str,
    ) -> StoreResult<()> {
        let entry = urlencoding::encode(entry);
        self.transport
            .delete(&group_path(project_id, &format!("whitelist/{entry}")))
            .await
    }

    // Private endpoints.

    pub(crate) async fn private_endpoints(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<Vec<PrivateEndpointConnection>> {
        self.transport
            .get_json(&group_path(project_id, "privateEndpoint"), &opts.query())
            .await
    }

    pub(crate) async fn private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<PrivateEndpointConnection> {
        self.transport
            .get_json(
                &group_path(project_id, &format!("privateEndpoint/{private_link_id}")),
                &[],
            )
            .await
    }

    pub(crate) async fn create_private_endpoint(
        &self,
        project_id: &str,
        connection: &PrivateEndpointConnection,
    ) -> StoreResult<PrivateEndpointConnection> {
        self.transport
            .post_json(&group_path(project_id, "privateEndpoint"), &[], connection)
            .await
    }

    pub(crate) async fn delete_private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<()> {
        self.transport
            .delete(&group_path(
                project_id,
                &format!("privateEndpoint/{private_link_id}"),
            ))
            .await
    }

    // Interface endpoints.

    pub(crate) async fn interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection> {
        self.transport
            .get_json(
                &group_path(
                    project_id,
                    &format!(
                        "privateEndpoint/{private_link_id}/interfaceEndpoints/{interface_endpoint_id}"
                    ),
                ),
                &[],
            )
            .await
    }

    pub(crate) async fn create_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection> {
        self.transport
            .post_json(
                &group_path(
                    project_id,
                    &format!("privateEndpoint/{private_link_id}/interfaceEndpoints"),
                ),
                &[],
                &serde_json::json!({ "interfaceEndpointId": interface_endpoint_id }),
            )
            .await
    }

    pub(crate) async fn delete_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<()> {
        self.transport
            .delete(&group_path(
                project_id,
                &format!(
                    "privateEndpoint/{private_link_id}/interfaceEndpoints/{interface_endpoint_id}"
                ),
            ))
            .await
    }

    // Data lakes.

    pub(crate) async fn data_lakes(&self, project_id: &str) -> StoreResult<Vec<DataLake>> {
        self.transport
            .get_json(&group_path(project_id, "dataLakes"), &[])
            .await
    }

    pub(crate) async fn data_lake(&self, project_id: &str, name: &str) -> StoreResult<DataLake> {
        self.transport
            .get_json(&group_path(project_id, &format!("dataLakes/{name}")), &[])
            .await
    }

    pub(crate) async fn create_data_lake(
        &self,
        project_id: &str,
        request: &DataLakeCreateRequest,
    ) -> StoreResult<DataLake> {
        self.transport
            .post_json(&group_path(project_id, "dataLakes"), &[], request)
            .await
    }
}
