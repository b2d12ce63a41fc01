use crate::domain::model::{ErrorPolicy, OperatorScan};
use crate::domain::ports::{ConfigProvider, DEFAULT_EXIT_COMMAND, DEFAULT_PROMPT};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

lazy_static! {
    /// Matches `${VAR_NAME}` references.
    static ref ENV_VAR: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub repl: ReplConfig,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplConfig {
    pub prompt: Option<String>,
    pub exit_command: Option<String>,
    pub on_error: Option<ErrorPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluatorConfig {
    pub operator_scan: Option<OperatorScan>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn prompt(&self) -> &str {
        self.repl.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn exit_command(&self) -> &str {
        self.repl.exit_command.as_deref().unwrap_or(DEFAULT_EXIT_COMMAND)
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.repl.on_error.unwrap_or_default()
    }

    fn operator_scan(&self) -> OperatorScan {
        self.evaluator.operator_scan.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(exit_command) = &self.repl.exit_command {
            validation::validate_non_empty_string("repl.exit_command", exit_command)?;
            validation::validate_trimmed("repl.exit_command", exit_command)?;
        }
        if let Some(prompt) = &self.repl.prompt {
            validation::validate_single_line("repl.prompt", prompt)?;
        }
        Ok(())
    }
}
