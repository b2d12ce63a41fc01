use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("expression does not contain a math operator")]
    MissingOperator,

    #[error("number of operands is greater than {max}")]
    TooManyOperands { max: usize },

    #[error("operands use different numeral systems or one of them is not in the range 1 to 10")]
    MixedOrOutOfRangeNotation,

    #[error("operand '{operand}' is not a number")]
    NotANumber { operand: String },

    #[error("operation is only possible with numbers from {min} to {max}, got {value}")]
    OutOfRange { value: i64, min: i32, max: i32 },

    #[error("result of the expression is {value} and cannot be written in Roman numerals")]
    NonPositiveRomanResult { value: i32 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("operand '{operand}' is not a Roman numeral from I to X")]
    UnrecognizedOperand { operand: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Notation,
    Range,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingOperator | Self::TooManyOperands { .. } => ErrorCategory::Syntax,
            Self::MixedOrOutOfRangeNotation
            | Self::NotANumber { .. }
            | Self::UnrecognizedOperand { .. } => ErrorCategory::Notation,
            Self::OutOfRange { .. } | Self::NonPositiveRomanResult { .. } => ErrorCategory::Range,
            Self::DivisionByZero => ErrorCategory::Arithmetic,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Syntax
            | ErrorCategory::Notation
            | ErrorCategory::Range
            | ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the error comes from a single bad expression rather than the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::System
        )
    }

    /// Process exit code for a run that stopped on this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write the console: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingOperator => "Use one of the operators + - * / between two numbers, e.g. 3+4",
            Self::TooManyOperands { .. } => "Enter exactly two numbers with one operator, e.g. VI*II",
            Self::MixedOrOutOfRangeNotation => {
                "Write both numbers as Arabic (1-10) or both as Roman (I-X)"
            }
            Self::NotANumber { .. } | Self::UnrecognizedOperand { .. } => {
                "Check the spelling of both numbers"
            }
            Self::OutOfRange { .. } => "Use numbers from 1 to 10",
            Self::NonPositiveRomanResult { .. } => {
                "Roman numerals have no zero or negative values; swap the operands or use Arabic numbers"
            }
            Self::DivisionByZero => "Use a non-zero divisor",
            Self::IoError(_) => "Check that standard input and output are available",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
