use crate::domain::model::{ErrorPolicy, OperatorScan};

pub const DEFAULT_PROMPT: &str =
    "Enter a math expression with numbers from 1 to 10 in Roman or Arabic notation";
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Settings the evaluator and REPL read, whatever source they were loaded from.
pub trait ConfigProvider {
    fn prompt(&self) -> &str {
        DEFAULT_PROMPT
    }

    fn exit_command(&self) -> &str {
        DEFAULT_EXIT_COMMAND
    }

    fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::default()
    }

    fn operator_scan(&self) -> OperatorScan {
        OperatorScan::default()
    }
}
