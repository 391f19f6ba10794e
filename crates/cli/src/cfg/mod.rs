/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod cli_options;
pub mod dispatch;
pub mod prompt;
pub mod runtime;
