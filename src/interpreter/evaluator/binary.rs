use std::io::Write;

use crate::{
    ast::{BinaryOperator, Evaluation, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<'_, W> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated fully before the right one, and both
    /// are always evaluated: `&&` and `||` do not short-circuit.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            op: BinaryOperator,
                                                            left: &Node,
                                                            right: &Node,
                                                            line: usize)
                                                            -> EvalResult<Evaluation> {
        let left_value = self.eval(left)?.value;
        let right_value = self.eval(right)?.value;

        Ok(Evaluation::from(apply_binary(op, left_value, right_value, line)?))
    }
}

/// Applies a binary operator to two integers.
///
/// Division truncates toward zero, the native `i64` behavior. Comparisons
/// and the logical connectives yield exactly `0` or `1`, with any nonzero
/// operand counting as true.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when the right operand of `/`
/// or `%` is zero.
fn apply_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0 {
                   return Err(RuntimeError::DivisionByZero { line });
               }
               left / right
           },
           Mod => {
               if right == 0 {
                   return Err(RuntimeError::DivisionByZero { line });
               }
               left % right
           },
           Less => i64::from(left < right),
           LessEqual => i64::from(left <= right),
           Greater => i64::from(left > right),
           GreaterEqual => i64::from(left >= right),
           Equal => i64::from(left == right),
           NotEqual => i64::from(left != right),
           And => i64::from(left != 0 && right != 0),
           Or => i64::from(left != 0 || right != 0),
       })
}
