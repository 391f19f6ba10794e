/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Process disk monitoring dispatch. Served by the server management
//! plane, whether hosted (cloud-manager) or self-managed.

use api_model::ListOptions;
use api_model::measurement::{MeasurementOptions, ProcessDiskMeasurements, ProcessDisks};
use async_trait::async_trait;

use crate::errors::{StoreError, StoreResult};
use crate::{Backend, Service, Store};

#[async_trait]
pub trait ProcessDisksLister {
    async fn process_disks(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        opts: &ListOptions,
    ) -> StoreResult<ProcessDisks>;
}

#[async_trait]
pub trait ProcessDiskMeasurementsLister {
    async fn process_disk_measurements(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        partition: &str,
        opts: &MeasurementOptions,
    ) -> StoreResult<ProcessDiskMeasurements>;
}

#[async_trait]
impl ProcessDisksLister for Store {
    async fn process_disks(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        opts: &ListOptions,
    ) -> StoreResult<ProcessDisks> {
        match (self.service, &self.backend) {
            (Service::CloudManager | Service::Server, Backend::Server(client)) => {
                client.process_disks(project_id, host, port, opts).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}

#[async_trait]
impl ProcessDiskMeasurementsLister for Store {
    async fn process_disk_measurements(
        &self,
        project_id: &str,
        host: &str,
        port: u16,
        partition: &str,
        opts: &MeasurementOptions,
    ) -> StoreResult<ProcessDiskMeasurements> {
        match (self.service, &self.backend) {
            (Service::CloudManager | Service::Server, Backend::Server(client)) => {
                client
                    .process_disk_measurements(project_id, host, port, partition, opts)
                    .await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}
