use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Evaluation, FunctionDef, Node, Operand},
    error::RuntimeError,
    interpreter::env::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable environment, the table of functions the
/// parser registered, and the output sink `print` statements write to. It is
/// created once per program run and threaded through every node evaluation,
/// which keeps evaluation order and scope boundaries auditable and lets
/// tests capture the output stream.
pub struct Context<'a, W> {
    /// All variables visible to the running program.
    pub env:       Environment,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    pub functions: HashMap<String, FunctionDef>,
    out:           &'a mut W,
}

impl<'a, W: Write> Context<'a, W> {
    /// Creates a context with a fresh environment.
    ///
    /// # Parameters
    /// - `functions`: The function table produced by parsing.
    /// - `out`: Where `print` statements write.
    pub fn new(functions: HashMap<String, FunctionDef>, out: &'a mut W) -> Self {
        Self { env: Environment::new(),
               functions,
               out }
    }

    /// Evaluates a syntax tree node and returns its [`Evaluation`].
    ///
    /// This is the single dispatch point of the interpreter: every node
    /// kind is handled by one arm, so an unhandled kind is impossible by
    /// construction.
    ///
    /// # Errors
    /// Propagates any [`RuntimeError`] raised below: unbound variables,
    /// unknown functions, argument count mismatches, division by zero, or a
    /// failed output write.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Evaluation> {
        match node {
            Node::Sequence { statements } => self.eval_sequence(statements),
            Node::Operand { operand, line } => self.eval_operand(operand, *line),
            Node::BinaryOp { op, left, right, line } => self.eval_binary_op(*op, left, right, *line),
            Node::Assignment { name, value } => self.eval_assignment(name, value),
            Node::IfElse { condition,
                           then_block,
                           else_block, } => self.eval_if_else(condition, then_block, else_block),
            Node::While { condition, body } => self.eval_while(condition, body),
            Node::FunctionCall { name, arguments, line } => self.eval_call(name, arguments, *line),
            Node::Return { value } => self.eval_return(value),
            Node::Print { value, line } => self.eval_print(value, *line),
            Node::Empty => Ok(Evaluation::default()),
        }
    }

    /// Evaluates statements in order, stopping at the first one whose result
    /// signals `return` and propagating that result unchanged.
    fn eval_sequence(&mut self, statements: &[Node]) -> EvalResult<Evaluation> {
        for statement in statements {
            let result = self.eval(statement)?;
            if result.ret.is_some() {
                return Ok(result);
            }
        }
        Ok(Evaluation::default())
    }

    /// Evaluates an operand: a literal yields its stored value, an
    /// identifier reads the environment.
    fn eval_operand(&mut self, operand: &Operand, line: usize) -> EvalResult<Evaluation> {
        match operand {
            Operand::Literal(value) => Ok(Evaluation::from(*value)),
            Operand::Identifier(name) => Ok(Evaluation::from(self.env.read(name, line)?)),
        }
    }

    /// Evaluates the value node and writes the result under `name`.
    ///
    /// The write updates the nearest visible binding, creating one in the
    /// innermost frame only when the name is unbound everywhere in sight.
    fn eval_assignment(&mut self, name: &str, value: &Node) -> EvalResult<Evaluation> {
        let result = self.eval(value)?;
        self.env.write(name, result.value);
        Ok(Evaluation::from(1))
    }

    /// Evaluates the condition and runs the branch it selects; any nonzero
    /// condition value selects the if-branch. The branch result propagates
    /// unchanged, return signal included.
    fn eval_if_else(&mut self,
                    condition: &Node,
                    then_block: &Node,
                    else_block: &Node)
                    -> EvalResult<Evaluation> {
        let condition_value = self.eval(condition)?.value;

        if condition_value != 0 {
            self.eval(then_block)
        } else {
            self.eval(else_block)
        }
    }

    /// Evaluates the value expression and raises the `return` signal with
    /// it.
    fn eval_return(&mut self, value: &Node) -> EvalResult<Evaluation> {
        let result = self.eval(value)?;
        Ok(Evaluation::returning(result.value))
    }

    /// Evaluates the value expression and writes it, followed by a newline,
    /// to the context's output sink.
    fn eval_print(&mut self, value: &Node, line: usize) -> EvalResult<Evaluation> {
        let result = self.eval(value)?;

        writeln!(self.out, "{}", result.value).map_err(|e| {
                                                  RuntimeError::OutputFailed { details:
                                                                                   e.to_string(),
                                                                               line }
                                              })?;

        Ok(Evaluation::default())
    }
}
