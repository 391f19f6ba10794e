/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Project IP whitelist dispatch. Whitelists exist only on the hosted
//! database service; any other variant fails without a backend call.

use api_model::ListOptions;
use api_model::whitelist::{ProjectIpWhitelist, ProjectIpWhitelists};
use async_trait::async_trait;

use crate::errors::{StoreError, StoreResult};
use crate::{Backend, Service, Store};

#[async_trait]
pub trait WhitelistLister {
    async fn project_ip_whitelists(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<ProjectIpWhitelists>;
}

#[async_trait]
pub trait WhitelistDescriber {
    async fn project_ip_whitelist(
        &self,
        project_id: &str,
        entry: &str,
    ) -> StoreResult<ProjectIpWhitelist>;
}

#[async_trait]
pub trait WhitelistCreator {
    async fn create_project_ip_whitelist(
        &self,
        entry: &ProjectIpWhitelist,
    ) -> StoreResult<ProjectIpWhitelists>;
}

#[async_trait]
pub trait WhitelistDeleter {
    async fn delete_project_ip_whitelist(&self, project_id: &str, entry: &str)
    -> StoreResult<()>;
}

#[async_trait]
impl WhitelistLister for Store {
    async fn project_ip_whitelists(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<ProjectIpWhitelists> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.project_ip_whitelists(project_id, opts).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl WhitelistDescriber for Store {
    async fn project_ip_whitelist(
        &self,
        project_id: &str,
        entry: &str,
    ) -> StoreResult<ProjectIpWhitelist> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.project_ip_whitelist(project_id, entry).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl WhitelistCreator for Store {
    async fn create_project_ip_whitelist(
        &self,
        entry: &ProjectIpWhitelist,
    ) -> StoreResult<ProjectIpWhitelists> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.create_project_ip_whitelist(entry).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl WhitelistDeleter for Store {
    async fn delete_project_ip_whitelist(
        &self,
        project_id: &str,
        entry: &str,
    ) -> StoreResult<()> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.delete_project_ip_whitelist(project_id, entry).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}
