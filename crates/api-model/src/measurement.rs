/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::{Deserialize, Serialize};

use crate::ListOptions;

/// Query options for a measurement request. Granularity is an ISO 8601
/// duration (e.g. `PT1M`); period bounds the window when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementOptions {
    pub granularity: String,
    pub period: Option<String>,
    pub list: ListOptions,
}

impl MeasurementOptions {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("granularity", self.granularity.clone())];
        if let Some(period) = &self.period {
            params.push(("period", period.clone()));
        }
        params.extend(self.list.query());
        params
    }
}

/// One disk partition of a monitored database process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDisk {
    pub partition_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDisks {
    #[serde(default)]
    pub results: Vec<ProcessDisk>,
    #[serde(default)]
    pub total_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub timestamp: String,
    /// Absent when the agent had no sample for the interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_points: Vec<DataPoint>,
}

/// Measurement series for one disk partition of a process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDiskMeasurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<Measurement>,
}
