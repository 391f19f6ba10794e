/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Thin client for the server management-plane API, shared by
//! cloud-manager and self-managed deployments.

use api_model::ListOptions;
use api_model::measurement::{MeasurementOptions, ProcessDiskMeasurements, ProcessDisks};
use api_model::owner::{CreateUserResponse, User};

use crate::errors::StoreResult;
use crate::transport::ApiTransport;

#[derive(Debug, Clone)]
pub(crate) struct ServerClient {
    transport: ApiTransport,
}

fn group_path(project_id: &str, suffix: &str) -> String {
    format!("api/server/v1/groups/{project_id}/{suffix}")
}

impl ServerClient {
    pub(crate) fn new(
        base_url: &str,
        credentials: Option<(String, String)>,
    ) -> StoreResult<Self> {
        Ok(Self {
            transport: ApiTransport::new(base_url, credentials)?,
        })
    }

    /// Creates the first owner of a fresh deployment. The whitelist
    /// IPs ride along as repeated query parameters.
    pub(crate) async fn create_owner(
        &self,
        user: &User,
        whitelist_ips: &[String],
    ) -> StoreResult<CreateUserResponse> {
        let query: Vec<(&str, String)> = whitelist_ips
            .iter()
            .map(|ip| ("whitelist", ip.clone()))
            .collect();
        self.transport
            .post_json("api/server/v1/unauth/users", &query, user)
            .await
    }

    pub(crate) async fn process_disks(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        opts: &ListOptions,
    ) -> StoreResult<ProcessDisks> {
        self.transport
            .get_json(
                &group_path(project_id, &format!("processes/{host}:{port}/disks")),
                &opts.query(),
            )
            .await
    }

    pub(crate) async fn process_disk_measurements(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        partition: &str,
        opts: &MeasurementOptions,
    ) -> StoreResult<ProcessDiskMeasurements> {
        self.transport
            .get_json(
                &group_path(
                    project_id,
                    &format!("processes/{host}:{port}/disks/{partition}/measurements"),
                ),
                &opts.query(),
            )
            .await
    }
}
