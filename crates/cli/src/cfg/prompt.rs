/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use store::cli::StratoCliResult;

// SecretPrompt is the capability commands use to request secrets that
// were not passed on the command line. Injected through the runtime
// context so command logic can be tested without a terminal.
pub trait SecretPrompt {
    fn password(&self, message: &str) -> StratoCliResult<String>;
}

pub struct TerminalPrompter;

impl SecretPrompt for TerminalPrompter {
    fn password(&self, message: &str) -> StratoCliResult<String> {
        Ok(rpassword::prompt_password(message)?)
    }
}
