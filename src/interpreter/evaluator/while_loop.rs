use std::io::Write;

use crate::{
    ast::{Evaluation, Node},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<'_, W> {
    /// Evaluates a while loop.
    ///
    /// The body runs while the condition evaluates to exactly 1; unlike
    /// `if`, a merely nonzero condition does not continue the loop. Each
    /// iteration runs inside one fresh block scope, so variables created in
    /// the body do not survive to the next iteration. A body result that
    /// signals `return` stops the loop and propagates upward; the iteration
    /// frame is popped before the signal leaves the loop.
    pub(in crate::interpreter::evaluator) fn eval_while(&mut self,
                                                        condition: &Node,
                                                        body: &Node)
                                                        -> EvalResult<Evaluation> {
        while self.eval(condition)?.value == 1 {
            self.env.enter_block();
            let result = self.eval(body);
            self.env.exit_block();

            let result = result?;
            if result.ret.is_some() {
                return Ok(result);
            }
        }

        Ok(Evaluation::default())
    }
}
