// Domain layer: value types and ports shared by the evaluator, REPL and config sources.

pub mod model;
pub mod ports;
