/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shared HTTP plumbing for the backend clients: URL joining, the
//! configured credential pair, JSON decode, and error-body mapping.
//! Deliberately free of retries, timeouts, and pagination logic.

use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};

#[derive(Debug, Clone)]
pub(crate) struct ApiTransport {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, String)>,
}

// Error envelope the API wraps failures in.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

impl ApiTransport {
    pub(crate) fn new(
        base_url: &str,
        credentials: Option<(String, String)>,
    ) -> StoreResult<Self> {
        // Url::join drops the last path segment unless the base ends
        // with a slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|source| StoreError::InvalidUrl {
            url: normalized.clone(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("stratocli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> StoreResult<T> {
        let mut request = self.http.get(self.endpoint(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, "GET", path).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> StoreResult<T> {
        let mut request = self.http.post(self.endpoint(path)?).json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, "POST", path).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> StoreResult<()> {
        let request = self.http.delete(self.endpoint(path)?);
        self.execute(request, "DELETE", path).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> StoreResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| StoreError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> StoreResult<Response> {
        let request = match &self.credentials {
            Some((public, private)) => request.basic_auth(public, Some(private)),
            None => request,
        };
        tracing::debug!(method, path, "issuing API request");

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Prefer the API's own failure detail; fall back to the bare
        // status line when the body is not the usual envelope.
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(StoreError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}
