/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data lake dispatch. Cloud only.

use api_model::data_lake::{DataLake, DataLakeCreateRequest};
use async_trait::async_trait;

use crate::errors::{StoreError, StoreResult};
use crate::{Backend, Service, Store};

#[async_trait]
pub trait DataLakeLister {
    async fn data_lakes(&self, project_id: &str) -> StoreResult<Vec<DataLake>>;
}

#[async_trait]
pub trait DataLakeDescriber {
    async fn data_lake(&self, project_id: &str, name: &str) -> StoreResult<DataLake>;
}

#[async_trait]
pub trait DataLakeCreator {
    async fn create_data_lake(
        &self,
        project_id: &str,
        request: &DataLakeCreateRequest,
    ) -> StoreResult<DataLake>;
}

#[async_trait]
impl DataLakeLister for Store {
    async fn data_lakes(&self, project_id: &str) -> StoreResult<Vec<DataLake>> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => client.data_lakes(project_id).await,
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl DataLakeDescriber for Store {
    async fn data_lake(&self, project_id: &str, name: &str) -> StoreResult<DataLake> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => client.data_lake(project_id, name).await,
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl DataLakeCreator for Store {
    async fn create_data_lake(
        &self,
        project_id: &str,
        request: &DataLakeCreateRequest,
    ) -> StoreResult<DataLake> {
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Cloud(client)) => {
                client.create_data_lake(project_id, request).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}
