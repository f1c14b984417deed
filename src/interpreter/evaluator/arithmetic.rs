use log::trace;

use crate::{
    ast::{ArithmeticFunction, Node},
    error::{EvalResult, EvaluationError},
    interpreter::evaluator::core::Reducer,
};

impl Reducer {
    /// Applies an arithmetic function to reduced operands.
    ///
    /// When both operands are literals the node is replaced by a literal
    /// holding the result. Otherwise the node is rebuilt unchanged so that an
    /// enclosing `let` can substitute into it later.
    ///
    /// # Errors
    /// - `InvalidArguments` if a literal operand is outside the 32-bit range.
    /// - `CalculationError` on division by zero.
    pub(in crate::interpreter::evaluator) fn eval_function(&mut self,
                                                           function: ArithmeticFunction,
                                                           left: Node,
                                                           right: Node)
                                                           -> EvalResult<Node> {
        if let (Node::Literal(a), Node::Literal(b)) = (&left, &right) {
            let result = compute(function, parse_operand(a)?, parse_operand(b)?)?;
            trace!("{function}({a},{b}) => {result}");

            let reduced = Node::literal(result);
            self.record(&reduced);
            return Ok(reduced);
        }

        Ok(Node::Function { function,
                            left: Box::new(left),
                            right: Box::new(right) })
    }
}

fn parse_operand(text: &str) -> EvalResult<i32> {
    text.parse()
        .map_err(|_| EvaluationError::invalid_arguments(format!("'{text}' is not a 32-bit integer")))
}

/// Computes a two-operand arithmetic function on 32-bit integers.
///
/// `add`, `sub` and `multi` wrap around on overflow. `div` truncates toward
/// zero, and `div(i32::MIN, -1)` wraps to `i32::MIN`.
///
/// # Errors
/// `CalculationError` if `function` is `div` and `b` is zero.
///
/// # Examples
/// ```
/// use letcalc::{ast::ArithmeticFunction, interpreter::evaluator::arithmetic::compute};
///
/// assert_eq!(compute(ArithmeticFunction::Div, 7, -3).unwrap(), -2);
/// assert_eq!(compute(ArithmeticFunction::Add, i32::MAX, 1).unwrap(), i32::MIN);
/// assert!(compute(ArithmeticFunction::Div, 1, 0).is_err());
/// ```
pub fn compute(function: ArithmeticFunction, a: i32, b: i32) -> EvalResult<i32> {
    match function {
        ArithmeticFunction::Add => Ok(a.wrapping_add(b)),
        ArithmeticFunction::Sub => Ok(a.wrapping_sub(b)),
        ArithmeticFunction::Multi => Ok(a.wrapping_mul(b)),
        ArithmeticFunction::Div => {
            if b == 0 {
                Err(EvaluationError::calculation(format!("division by zero in div({a},{b})")))
            } else {
                Ok(a.wrapping_div(b))
            }
        },
    }
}
