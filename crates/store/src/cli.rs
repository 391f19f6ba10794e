/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Types shared with the CLI binary, gated behind the `cli` feature so
//! other store consumers do not pull in clap.

use clap::ValueEnum;

use crate::errors::StoreError;

pub type StratoCliResult<T> = Result<T, StratoCliError>;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// StratoCliError is the terminal error type of every command handler.
/// Lower-layer errors pass through transparently so the message the
/// user sees is the message the layer produced.
#[derive(Debug, thiserror::Error)]
pub enum StratoCliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("JSON serialization failure: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO failure: {0}")]
    IoError(#[from] std::io::Error),
    #[error("no project ID provided; pass --project-id or set project_id in the profile")]
    MissingProjectId,
    #[error("no results")]
    Empty,
    #[error("{0}")]
    GenericError(String),
}
