/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Plain serde mirrors of the management API's JSON payloads. These
//! carry no behavior; required-field checking happens at the CLI flag
//! layer and anything stricter is the server's job.

pub mod data_lake;
pub mod measurement;
pub mod owner;
pub mod private_endpoint;
pub mod whitelist;

use serde::{Deserialize, Serialize};

/// Paging options forwarded verbatim as `pageNum` / `itemsPerPage`
/// query parameters. Zero means "let the server pick".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    #[serde(default)]
    pub page_num: usize,
    #[serde(default)]
    pub items_per_page: usize,
}

impl ListOptions {
    pub fn new(page_num: usize, items_per_page: usize) -> Self {
        Self {
            page_num,
            items_per_page,
        }
    }

    /// Query-parameter form, omitting zero values.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.page_num > 0 {
            params.push(("pageNum", self.page_num.to_string()));
        }
        if self.items_per_page > 0 {
            params.push(("itemsPerPage", self.items_per_page.to_string()));
        }
        params
    }
}
