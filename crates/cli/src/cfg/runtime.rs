/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 StratoDB, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use store::Profile;
use store::cli::{OutputFormat, StratoCliError, StratoCliResult};

use crate::cfg::prompt::SecretPrompt;

// RuntimeContext is context passed to all subcommand dispatch
// handlers. Built once at startup from the parsed global options and
// the resolved profile, then handed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub profile: Profile,
    pub config: RuntimeConfig,
    pub prompter: Box<dyn SecretPrompt>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options, shared by every downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
}

impl RuntimeContext {
    /// Effective project ID: the command flag wins over the profile
    /// default.
    pub fn project_id(&self, flag: Option<&str>) -> StratoCliResult<String> {
        flag.map(str::to_string)
            .or_else(|| self.profile.project_id.clone())
            .ok_or(StratoCliError::MissingProjectId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::prompt::TerminalPrompter;

    fn context(profile_project: Option<&str>) -> RuntimeContext {
        RuntimeContext {
            profile: Profile {
                project_id: profile_project.map(str::to_string),
                ..Default::default()
            },
            config: RuntimeConfig {
                format: OutputFormat::Table,
            },
            prompter: Box::new(TerminalPrompter),
        }
    }

    #[test]
    fn flag_overrides_profile_project() {
        let ctx = context(Some("from-profile"));
        let id = ctx.project_id(Some("from-flag")).expect("should resolve");
        assert_eq!(id, "from-flag");
    }

    #[test]
    fn profile_project_is_the_fallback() {
        let ctx = context(Some("from-profile"));
        let id = ctx.project_id(None).expect("should resolve");
        assert_eq!(id, "from-profile");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let ctx = context(None);
        let err = ctx.project_id(None).expect_err("should fail");
        assert!(matches!(err, StratoCliError::MissingProjectId));
    }
}
