use crate::config::toml_config::TomlConfig;
use crate::config::ResolvedConfig;
use crate::domain::model::{ErrorPolicy, OperatorScan};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numeral-calc")]
#[command(about = "Calculator for Arabic (1-10) and Roman (I-X) numbers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do after an expression fails
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// How to pick the operator when several operator symbols are present
    #[arg(long, value_enum)]
    pub operator_scan: Option<OperatorScan>,

    /// Line that ends the session
    #[arg(long)]
    pub exit_command: Option<String>,

    /// Text printed before each expression is read
    #[arg(long)]
    pub prompt: Option<String>,

    /// Evaluate a single expression and exit
    #[arg(short, long)]
    pub expr: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Load the TOML file (if any) and apply command line overrides on top.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let mut resolved = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                ResolvedConfig::from_provider(&file)
            }
            None => ResolvedConfig::default(),
        };

        if let Some(on_error) = self.on_error {
            resolved.error_policy = on_error;
        }
        if let Some(operator_scan) = self.operator_scan {
            resolved.operator_scan = operator_scan;
        }
        if let Some(exit_command) = &self.exit_command {
            resolved.exit_command = exit_command.clone();
        }
        if let Some(prompt) = &self.prompt {
            resolved.prompt = prompt.clone();
        }

        resolved.validate()?;
        Ok(resolved)
    }
}
