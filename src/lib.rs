pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ResolvedConfig};
pub use crate::core::{evaluator::Evaluator, repl::Repl, repl::ReplSummary};
pub use crate::domain::model::{ErrorPolicy, Notation, Operator, OperatorScan};
pub use crate::utils::error::{CalcError, Result};
