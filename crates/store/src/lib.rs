/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The store is the single seam between CLI commands and the
//! management API. A [`Store`] is bound at construction time to one
//! backend client, chosen by the profile's service variant; every
//! operation it exposes either forwards to that client or fails with
//! an "unsupported service" error when the variant has no handler for
//! the resource family.

pub mod config;
pub mod data_lakes;
pub mod errors;
pub mod owners;
pub mod private_endpoints;
pub mod process_disk_measurements;
pub mod whitelist;

#[cfg(feature = "cli")]
pub mod cli;

mod cloud_client;
mod server_client;
mod transport;

pub use config::{Profile, Service};
pub use errors::{StoreError, StoreResult};

use crate::cloud_client::CloudClient;
use crate::config::DEFAULT_CLOUD_URL;
use crate::server_client::ServerClient;

// Closed set of backend clients. The hosted database service speaks
// the cloud API; cloud-manager and self-managed server deployments
// both speak the server API.
#[derive(Debug)]
pub(crate) enum Backend {
    Cloud(CloudClient),
    Server(ServerClient),
}

/// Facade over exactly one backend client, tagged with the service
/// variant it was configured for. Built once per command invocation
/// and read-only afterward.
#[derive(Debug)]
pub struct Store {
    service: Service,
    backend: Backend,
}

impl Store {
    /// Builds a store carrying the profile's API key pair. Fails when
    /// the credentials or a required base URL are missing.
    pub fn new(profile: &Profile) -> StoreResult<Self> {
        let credentials = match (&profile.public_api_key, &profile.private_api_key) {
            (Some(public), Some(private)) => (public.clone(), private.clone()),
            _ => {
                return Err(StoreError::Config(
                    "missing API key pair; set public_api_key and private_api_key".to_string(),
                ));
            }
        };
        Self::build(profile, Some(credentials))
    }

    /// Builds a store without credentials. Only the owner bootstrap
    /// endpoint of a fresh server deployment accepts such calls.
    pub fn new_unauthenticated(profile: &Profile) -> StoreResult<Self> {
        Self::build(profile, None)
    }

    fn build(profile: &Profile, credentials: Option<(String, String)>) -> StoreResult<Self> {
        let backend = match profile.service {
            Service::Cloud => Backend::Cloud(CloudClient::new(&cloud_url(profile), credentials)?),
            Service::CloudManager => {
                Backend::Server(ServerClient::new(&cloud_url(profile), credentials)?)
            }
            Service::Server => {
                Backend::Server(ServerClient::new(&server_url(profile)?, credentials)?)
            }
        };
        Ok(Self {
            service: profile.service,
            backend,
        })
    }

    pub fn service(&self) -> Service {
        self.service
    }
}

fn cloud_url(profile: &Profile) -> String {
    profile
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_CLOUD_URL.to_string())
}

fn server_url(profile: &Profile) -> StoreResult<String> {
    profile.base_url.clone().ok_or_else(|| {
        StoreError::Config("base_url is required for the server service".to_string())
    })
}
