/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Owner provisioning dispatch. Only a self-managed server deployment
//! has the unauthenticated bootstrap endpoint.

use api_model::owner::{CreateUserResponse, User};
use async_trait::async_trait;

use crate::errors::{StoreError, StoreResult};
use crate::{Backend, Service, Store};

#[async_trait]
pub trait OwnerCreator {
    async fn create_owner(
        &self,
        user: &User,
        whitelist_ips: &[String],
    ) -> StoreResult<CreateUserResponse>;
}

#[async_trait]
impl OwnerCreator for Store {
    async fn create_owner(
        &self,
        user: &User,
        whitelist_ips: &[String],
    ) -> StoreResult<CreateUserResponse> {
        match (self.service, &self.backend) {
            (Service::Server, Backend::Server(client)) => {
                client.create_owner(user, whitelist_ips).await
            }
            _ => Err(StoreError::UnsupportedService(self.service)),
        }
    }
}
