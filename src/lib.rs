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
 *   - The MIT license
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

//! TreeLox: scanner, recursive-descent parser and tree-walking evaluator
//! for a small dynamically-typed scripting language.
//!
//! ```text
//! Source → lexer::tokenize → parser::parse → Interpreter::interpret
//! ```
//!
//! `Lox` chains the three stages and keeps one interpreter (and so one
//! global scope) alive across runs.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod stack;
pub mod value;

use tracing::{debug, warn};

use diagnostics::Reporter;
use interpreter::print_handler::PrintHandler;
use interpreter::Interpreter;

/// Outcome of one `Lox::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// At least one scan or parse error was reported.
    StaticError,
    /// A runtime fault aborted the program.
    RuntimeError,
}

impl RunStatus {
    /// Process exit status for the file runner.
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Ok => 0,
            RunStatus::StaticError => 65,
            RunStatus::RuntimeError => 70,
        }
    }
}

/// Debug dumps written to the output handler before execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// One JSON object per scanned token.
    pub print_tokens: bool,
    /// One prefix-form line per parsed statement.
    pub print_ast: bool,
}

/// Counts diagnostics on their way to the real reporter.
struct Tally<'a> {
    inner: &'a mut dyn Reporter,
    count: usize,
}

impl Reporter for Tally<'_> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.count += 1;
        self.inner.report(line, location, message);
    }
}

/// An interpreter session.
///
/// Every `run` scans, parses and executes one chunk of source against the
/// same global scope. Diagnostics from all three stages go to the
/// session's reporter.
pub struct Lox<R: Reporter> {
    interpreter: Interpreter,
    reporter: R,
    options: Options,
}

impl<R: Reporter> Lox<R> {
    pub fn new(output: PrintHandler, reporter: R) -> Self {
        Self {
            interpreter: Interpreter::with_output(output),
            reporter,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Scans, parses and executes `source`.
    ///
    /// Statements that parsed cleanly run even when others in the same
    /// source had syntax errors; the status still reports the static error.
    pub fn run(&mut self, source: &str) -> RunStatus {
        let (program, static_errors) = {
            let mut tally = Tally {
                inner: &mut self.reporter,
                count: 0,
            };

            let tokens = lexer::tokenize(source, &mut tally);
            if self.options.print_tokens {
                let output = self.interpreter.output_mut();
                for token in &tokens {
                    match serde_json::to_string(token) {
                        Ok(json) => output.println(&json),
                        Err(err) => warn!(%err, "failed to serialize token"),
                    }
                }
            }

            let program = parser::parse(tokens, &mut tally);
            (program, tally.count)
        };

        if self.options.print_ast {
            let output = self.interpreter.output_mut();
            for stmt in &program {
                output.println(&stmt.to_string());
            }
        }

        debug!(statements = program.len(), static_errors, "executing");
        let result = self.interpreter.interpret(&program, &mut self.reporter);

        if static_errors > 0 {
            RunStatus::StaticError
        } else if result.is_err() {
            RunStatus::RuntimeError
        } else {
            RunStatus::Ok
        }
    }
}
