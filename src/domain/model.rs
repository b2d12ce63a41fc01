use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeral system shared by both operands of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Arabic,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Fixed order used by [`OperatorScan::ScanOrder`].
    pub const SCAN_ORDER: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Div, Operator::Mul];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How the operator is picked when the input holds more than one operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OperatorScan {
    /// The symbol that occurs first in the input.
    #[default]
    Leftmost,
    /// The first of `+ - / *`, in that order, present anywhere in the input.
    ///
    /// This is not the historical calculator's behavior: that one kept the
    /// last symbol of `+ - / *` present, so `2*3-1` split on `*`.
    ScanOrder,
}

/// What the REPL does after printing an evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ErrorPolicy {
    #[default]
    Continue,
    Exit,
}

/// A normalized input split into its two operand tokens and operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub right: String,
    pub operator: Operator,
}

/// Result of an arithmetic operation and the notation it is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub notation: Notation,
}
