/*
 * ==========================================================================
 * TreeLox - a tree-walking Lox interpreter
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Github:   https://github.com/samwilcox/treelox
 *
 * License:
 * This file is part of the TreeLox project.
 *
 * TreeLox is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod print_handler;
pub mod statements;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::ast::Stmt;
use crate::diagnostics::Reporter;
use crate::error::LoxError;
use environment::Environment;
use print_handler::PrintHandler;

/// Tree-walking evaluator.
///
/// Holds the global scope for its whole lifetime, so definitions made by
/// one `interpret` call are visible to the next (the REPL relies on this).
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) environment: Environment,
    pub(crate) output: PrintHandler,
}

impl Interpreter {
    /// Interpreter printing to `output`.
    pub fn with_output(output: PrintHandler) -> Self {
        Self {
            environment: Environment::new(),
            output,
        }
    }

    pub fn output_mut(&mut self) -> &mut PrintHandler {
        &mut self.output
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a full program from a list of parsed statements.
    ///
    /// Statements run in source order. The first runtime fault stops the
    /// program: it is sent to `reporter` and returned, and the remaining
    /// statements are skipped. Globals defined before the fault survive.
    pub fn interpret(
        &mut self,
        program: &[Stmt],
        reporter: &mut dyn Reporter,
    ) -> Result<(), LoxError> {
        for stmt in program {
            if let Err(err) = self.execute(stmt) {
                debug!(code = err.code, line = err.line, message = %err.message, "runtime error");
                reporter.error(&err);
                return Err(err);
            }
        }

        Ok(())
    }
}
