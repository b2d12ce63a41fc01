pub mod evaluator;
pub mod repl;
pub mod roman;

pub use crate::domain::model::{ErrorPolicy, Evaluation, Expression, Notation, Operator, OperatorScan};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
