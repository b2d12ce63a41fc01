use crate::core::roman::{self, MAX_OPERAND, MIN_OPERAND};
use crate::domain::model::{Evaluation, Expression, Notation, Operator, OperatorScan};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};

pub const MAX_OPERANDS: usize = 2;

/// Evaluates `A<op>B` expressions over Arabic 1..=10 or Roman I..=X operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    operator_scan: OperatorScan,
}

impl Evaluator {
    pub fn new(operator_scan: OperatorScan) -> Self {
        Self { operator_scan }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.operator_scan())
    }

    pub fn operator_scan(&self) -> OperatorScan {
        self.operator_scan
    }

    pub fn evaluate(&self, raw: &str) -> Result<String> {
        let normalized = normalize(raw);
        tracing::debug!("Evaluating '{}'", normalized);

        let expression = self.find_operands_and_operator(&normalized)?;
        let notation = classify_operands(&expression)?;
        let (left, right) = to_integers(&expression, notation)?;
        tracing::trace!(
            "Operands {} {} {} in {:?} notation",
            left,
            expression.operator,
            right,
            notation
        );

        let value = compute(left, right, expression.operator)?;
        format_result(Evaluation { value, notation })
    }

    /// Pick the operator and split the normalized input around it.
    pub fn find_operands_and_operator(&self, normalized: &str) -> Result<Expression> {
        let operator = match self.operator_scan {
            OperatorScan::Leftmost => normalized.chars().find_map(Operator::from_symbol),
            OperatorScan::ScanOrder => Operator::SCAN_ORDER
                .into_iter()
                .find(|op| normalized.contains(op.symbol())),
        }
        .ok_or(CalcError::MissingOperator)?;

        let segments: Vec<&str> = normalized.split(operator.symbol()).collect();
        if segments.len() > MAX_OPERANDS {
            return Err(CalcError::TooManyOperands { max: MAX_OPERANDS });
        }

        Ok(Expression {
            left: segments[0].to_string(),
            right: segments[1].to_string(),
            operator,
        })
    }
}

/// Trim the input and drop every whitespace character inside it.
pub fn normalize(raw: &str) -> String {
    raw.trim().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decide the shared notation of both operands.
///
/// An operand that is not a Roman numeral from I to X is treated as Arabic;
/// whether it actually parses is checked by [`to_integers`].
pub fn classify_operands(expression: &Expression) -> Result<Notation> {
    match (roman::is_roman(&expression.left), roman::is_roman(&expression.right)) {
        (true, true) => Ok(Notation::Roman),
        (false, false) => Ok(Notation::Arabic),
        _ => Err(CalcError::MixedOrOutOfRangeNotation),
    }
}

pub fn to_integers(expression: &Expression, notation: Notation) -> Result<(i32, i32)> {
    let convert = match notation {
        Notation::Roman => roman_operand,
        Notation::Arabic => arabic_operand,
    };
    Ok((convert(&expression.left)?, convert(&expression.right)?))
}

fn roman_operand(operand: &str) -> Result<i32> {
    roman::from_roman(operand)
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| CalcError::UnrecognizedOperand {
            operand: operand.to_string(),
        })
}

// Digits only: a sign would be a second operator symbol.
fn arabic_operand(operand: &str) -> Result<i32> {
    let not_a_number = || CalcError::NotANumber {
        operand: operand.to_string(),
    };
    if operand.is_empty() || !operand.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    let value: i64 = operand.parse().map_err(|_| not_a_number())?;

    if value < i64::from(MIN_OPERAND) || value > i64::from(MAX_OPERAND) {
        return Err(out_of_range(value));
    }
    Ok(value as i32)
}

fn out_of_range(value: i64) -> CalcError {
    CalcError::OutOfRange {
        value,
        min: MIN_OPERAND as i32,
        max: MAX_OPERAND as i32,
    }
}

/// Apply `operator` as `left <op> right`. Division truncates toward zero.
pub fn compute(left: i32, right: i32, operator: Operator) -> Result<i32> {
    let (left, right) = (i64::from(left), i64::from(right));
    let wide = match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            left / right
        }
    };
    i32::try_from(wide).map_err(|_| out_of_range(wide))
}

pub fn format_result(evaluation: Evaluation) -> Result<String> {
    match evaluation.notation {
        Notation::Arabic => Ok(evaluation.value.to_string()),
        Notation::Roman if evaluation.value <= 0 => Err(CalcError::NonPositiveRomanResult {
            value: evaluation.value,
        }),
        Notation::Roman => Ok(roman::to_roman(evaluation.value.unsigned_abs())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(left: &str, operator: Operator, right: &str) -> Expression {
        Expression {
            left: left.to_string(),
            right: right.to_string(),
            operator,
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  3 + 4 \n"), "3+4");
        assert_eq!(normalize("\tV\t*  II\r\n"), "V*II");
    }

    #[test]
    fn test_split_leftmost() {
        let evaluator = Evaluator::default();
        assert_eq!(
            evaluator.find_operands_and_operator("7*2").unwrap(),
            expr("7", Operator::Mul, "2")
        );
        // '*' comes first in the input even though '-' is scanned earlier.
        assert_eq!(
            evaluator.find_operands_and_operator("2*3-1").unwrap(),
            expr("2", Operator::Mul, "3-1")
        );
    }

    #[test]
    fn test_split_scan_order() {
        let evaluator = Evaluator::new(OperatorScan::ScanOrder);
        assert_eq!(
            evaluator.find_operands_and_operator("2*3-1").unwrap(),
            expr("2*3", Operator::Sub, "1")
        );
        assert_eq!(
            evaluator.find_operands_and_operator("8/2").unwrap(),
            expr("8", Operator::Div, "2")
        );
    }

    #[test]
    fn test_split_errors() {
        let evaluator = Evaluator::default();
        assert!(matches!(
            evaluator.find_operands_and_operator("12"),
            Err(CalcError::MissingOperator)
        ));
        assert!(matches!(
            evaluator.find_operands_and_operator(""),
            Err(CalcError::MissingOperator)
        ));
        assert!(matches!(
            evaluator.find_operands_and_operator("1+2+3"),
            Err(CalcError::TooManyOperands { max: 2 })
        ));
        assert!(matches!(
            evaluator.find_operands_and_operator("+1+"),
            Err(CalcError::TooManyOperands { .. })
        ));
    }

    #[test]
    fn test_classify_operands() {
        assert_eq!(
            classify_operands(&expr("III", Operator::Add, "ii")).unwrap(),
            Notation::Roman
        );
        assert_eq!(
            classify_operands(&expr("3", Operator::Add, "abc")).unwrap(),
            Notation::Arabic
        );
        assert!(matches!(
            classify_operands(&expr("III", Operator::Add, "2")),
            Err(CalcError::MixedOrOutOfRangeNotation)
        ));
        assert!(matches!(
            classify_operands(&expr("XI", Operator::Add, "I")),
            Err(CalcError::MixedOrOutOfRangeNotation)
        ));
    }

    #[test]
    fn test_to_integers() {
        assert_eq!(
            to_integers(&expr("x", Operator::Add, "IV"), Notation::Roman).unwrap(),
            (10, 4)
        );
        assert_eq!(
            to_integers(&expr("10", Operator::Add, "1"), Notation::Arabic).unwrap(),
            (10, 1)
        );
        assert!(matches!(
            to_integers(&expr("0", Operator::Add, "1"), Notation::Arabic),
            Err(CalcError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            to_integers(&expr("5", Operator::Add, "1.5"), Notation::Arabic),
            Err(CalcError::NotANumber { .. })
        ));
        assert!(matches!(
            to_integers(&expr("+3", Operator::Mul, "5"), Notation::Arabic),
            Err(CalcError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_to_integers_rejects_unmatched_roman() {
        let err = to_integers(&expr("L", Operator::Add, "I"), Notation::Roman).unwrap_err();
        match err {
            CalcError::UnrecognizedOperand { operand } => assert_eq!(operand, "L"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_compute() {
        assert_eq!(compute(3, 4, Operator::Add).unwrap(), 7);
        assert_eq!(compute(3, 4, Operator::Sub).unwrap(), -1);
        assert_eq!(compute(3, 4, Operator::Mul).unwrap(), 12);
        assert_eq!(compute(7, 2, Operator::Div).unwrap(), 3);
        assert_eq!(compute(-7, 2, Operator::Div).unwrap(), -3);
        assert!(matches!(
            compute(5, 0, Operator::Div),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            compute(i32::MAX, 2, Operator::Mul),
            Err(CalcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_format_result() {
        let arabic = Evaluation {
            value: -9,
            notation: Notation::Arabic,
        };
        assert_eq!(format_result(arabic).unwrap(), "-9");

        let roman = Evaluation {
            value: 100,
            notation: Notation::Roman,
        };
        assert_eq!(format_result(roman).unwrap(), "C");

        let zero = Evaluation {
            value: 0,
            notation: Notation::Roman,
        };
        assert!(matches!(
            format_result(zero),
            Err(CalcError::NonPositiveRomanResult { value: 0 })
        ));
    }
}
