/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::{Deserialize, Serialize};

/// One project IP whitelist entry. Exactly one of `ip_address`,
/// `cidr_block`, or `aws_security_group` is expected to be set; the
/// server treats a multi-field entry as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIpWhitelist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_security_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_date: Option<String>,
}

impl ProjectIpWhitelist {
    /// The populated entry value, whichever field it lives in.
    pub fn entry(&self) -> &str {
        self.ip_address
            .as_deref()
            .or(self.cidr_block.as_deref())
            .or(self.aws_security_group.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIpWhitelists {
    #[serde(default)]
    pub results: Vec<ProjectIpWhitelist>,
    #[serde(default)]
    pub total_count: usize,
}
