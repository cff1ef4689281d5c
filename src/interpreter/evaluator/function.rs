use std::io::Write;

use crate::{
    ast::{Evaluation, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<'_, W> {
    /// Evaluates a function call.
    ///
    /// Every argument is evaluated in the caller's environment first. Only
    /// then does the call enter a function scope, bind each parameter to its
    /// precomputed argument value, and run the body. The function scope is
    /// exited on every path out, and the body's return value (0 if the body
    /// never returned) becomes the call's plain expression value: a
    /// function's `return` never propagates past its own call boundary.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if the name has no definition.
    /// - [`RuntimeError::ArgumentCountMismatch`] if the argument and
    ///   parameter counts differ.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       name: &str,
                                                       arguments: &[Node],
                                                       line: usize)
                                                       -> EvalResult<Evaluation> {
        let def = self.functions
                      .get(name)
                      .cloned()
                      .ok_or_else(|| {
                          RuntimeError::UnknownFunction { name: name.to_string(),
                                                         line }
                      })?;

        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { line });
        }

        let mut argument_values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            argument_values.push(self.eval(argument)?.value);
        }

        self.env.enter_function();
        for (param, value) in def.params.iter().zip(argument_values) {
            self.env.write(param, value);
        }

        let result = self.eval(&def.body);
        self.env.exit_function();

        let body = result?;
        Ok(Evaluation::from(body.ret.unwrap_or(0)))
    }
}
