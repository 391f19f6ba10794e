/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Service;

pub type StoreResult<T> = Result<T, StoreError>;

/// StoreError enumerates everything that can go wrong between parsing
/// flags and getting a decoded response back from a backend. Backend
/// failures are carried verbatim; nothing here retries or interprets.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unsupported service: {0}")]
    UnsupportedService(Service),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API error: {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
