#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::{ErrorPolicy, OperatorScan};
use crate::domain::ports::{ConfigProvider, DEFAULT_EXIT_COMMAND, DEFAULT_PROMPT};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Final settings after merging the config file and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub exit_command: String,
    pub error_policy: ErrorPolicy,
    pub operator_scan: OperatorScan,
}

impl ResolvedConfig {
    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            prompt: config.prompt().to_string(),
            exit_command: config.exit_command().to_string(),
            error_policy: config.error_policy(),
            operator_scan: config.operator_scan(),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
            error_policy: ErrorPolicy::default(),
            operator_scan: OperatorScan::default(),
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn exit_command(&self) -> &str {
        &self.exit_command
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    fn operator_scan(&self) -> OperatorScan {
        self.operator_scan
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("exit_command", &self.exit_command)?;
        validation::validate_trimmed("exit_command", &self.exit_command)?;
        validation::validate_single_line("prompt", &self.prompt)
    }
}
