/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Profile resolution. Profiles live as named tables in a TOML file
//! (`~/.config/stratocli/config.toml` unless `STRATOCLI_CONFIG` points
//! elsewhere) and any field can be overridden through the environment
//! with a `STRATOCLI_` prefix.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};

pub const ENV_PREFIX: &str = "STRATOCLI_";
pub const DEFAULT_PROFILE: &str = "default";
pub(crate) const DEFAULT_CLOUD_URL: &str = "https://cloud.stratodb.com/";

/// The deployment flavor a store talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// The hosted database service.
    #[default]
    Cloud,
    /// The hosted flavor of the server management plane.
    CloudManager,
    /// A self-managed server deployment.
    Server,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Service::Cloud => "cloud",
            Service::CloudManager => "cloud-manager",
            Service::Server => "server",
        };
        f.write_str(name)
    }
}

/// One resolved configuration profile. Defaults are all empty; which
/// fields are actually required depends on the service variant and is
/// checked at store construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub public_api_key: Option<String>,
    #[serde(default)]
    pub private_api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub org_id: Option<String>,
}

impl Profile {
    /// Loads the named profile from the default config location plus
    /// environment overrides.
    pub fn load(name: &str) -> StoreResult<Self> {
        Self::load_from(config_file().as_deref(), name)
    }

    /// Loads the named profile from an explicit file, or environment
    /// only when no file exists.
    pub fn load_from(path: Option<&Path>, name: &str) -> StoreResult<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path).nested());
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).global())
            .select(name)
            .extract()
            .map_err(|err| StoreError::Config(err.to_string()))
    }
}

fn config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STRATOCLI_CONFIG") {
        return Some(PathBuf::from(path));
    }
    directories::ProjectDirs::from("com", "StratoDB", "stratocli")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_display_matches_config_spelling() {
        assert_eq!(Service::Cloud.to_string(), "cloud");
        assert_eq!(Service::CloudManager.to_string(), "cloud-manager");
        assert_eq!(Service::Server.to_string(), "server");
    }

    #[test]
    fn load_selects_named_profile() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [default]
                    service = "cloud"
                    project_id = "default-project"

                    [onprem]
                    service = "server"
                    base_url = "http://opsmgr.internal:8080/"
                "#,
            )?;

            let profile = Profile::load_from(Some(Path::new("config.toml")), "onprem")
                .expect("profile should load");
            assert_eq!(profile.service, Service::Server);
            assert_eq!(
                profile.base_url.as_deref(),
                Some("http://opsmgr.internal:8080/")
            );
            assert_eq!(profile.project_id, None);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [default]
                    project_id = "from-file"
                "#,
            )?;
            jail.set_env("STRATOCLI_PROJECT_ID", "from-env");

            let profile = Profile::load_from(Some(Path::new("config.toml")), DEFAULT_PROFILE)
                .expect("profile should load");
            assert_eq!(profile.project_id.as_deref(), Some("from-env"));
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|_jail| {
            let profile = Profile::load_from(Some(Path::new("does-not-exist.toml")), "default")
                .expect("defaults should apply");
            assert_eq!(profile.service, Service::Cloud);
            assert_eq!(profile.public_api_key, None);
            Ok(())
        });
    }
}
