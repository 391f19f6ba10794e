/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Private endpoint and interface endpoint dispatch. Cloud only.

use api_model::ListOptions;
use api_model::private_endpoint::{InterfaceEndpointConnection, PrivateEndpointConnection};
use async_trait::async_trait;

use crate::errors::{StoreError, StoreResult};
use crate::{Backend, Service, Store};

#[async_trait]
pub trait PrivateEndpointLister {
    async fn private_endpoints(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<Vec<PrivateEndpointConnection>>;
}

#[async_trait]
pub trait PrivateEndpointDescriber {
    async fn private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<PrivateEndpointConnection>;
}

#[async_trait]
pub trait PrivateEndpointCreator {
    async fn create_private_endpoint(
        &self,
        project_id: &str,
        connection: &PrivateEndpointConnection,
    ) -> StoreResult<PrivateEndpointConnection>;
}

#[async_trait]
pub trait PrivateEndpointDeleter {
    async fn delete_private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<()>;
}

#[async_trait]
pub trait InterfaceEndpointDescriber {
    async fn interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection>;
}

#[async_trait]
pub trait InterfaceEndpointCreator {
    async fn create_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection>;
}

#[async_trait]
pub trait InterfaceEndpointDeleter {
    async fn delete_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<()>;
}

#[async_trait]
impl PrivateEndpointLister for Store {
    async fn private_endpoints(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> StoreResult<Vec<PrivateEndpointConnection>> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.private_endpoints(project_id, opts).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl PrivateEndpointDescriber for Store {
    async fn private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<PrivateEndpointConnection> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.private_endpoint(project_id, private_link_id).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl PrivateEndpointCreator for Store {
    async fn create_private_endpoint(
        &self,
        project_id: &str,
        connection: &PrivateEndpointConnection,
    ) -> StoreResult<PrivateEndpointConnection> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.create_private_endpoint(project_id, connection).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl PrivateEndpointDeleter for Store {
    async fn delete_private_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
    ) -> StoreResult<()> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client
                    .delete_private_endpoint(project_id, private_link_id)
                    .await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl InterfaceEndpointDescriber for Store {
    async fn interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client
                    .interface_endpoint(project_id, private_link_id, interface_endpoint_id)
                    .await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl InterfaceEndpointCreator for Store {
    async fn create_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<InterfaceEndpointConnection> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client
                    .create_interface_endpoint(project_id, private_link_id, interface_endpoint_id)
                    .await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl InterfaceEndpointDeleter for Store {
    async fn delete_interface_endpoint(
        &self,
        project_id: &str,
        private_link_id: &str,
        interface_endpoint_id: &str,
    ) -> StoreResult<()> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client
                    .delete_interface_endpoint(project_id, private_link_id, interface_endpoint_id)
                    .await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}
