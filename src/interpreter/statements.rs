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

/*!
 * Statement Executor
 * ------------------
 *
 * Executes every statement form. Expressions are handled by
 * `expressions.rs`.
 *
 *  • Expression and print statements
 *  • Variable declarations
 *  • Blocks (one fresh scope per execution)
 *  • Control flow (if, while)
 */

use crate::ast::Stmt;
use crate::error::LoxError;
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

impl Interpreter {
    /// Executes a single statement in the current scope.
    ///
    /// This is the **core dispatch function for all statement execution**.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), LoxError> {
        ensure_sufficient_stack(|| self.execute_node(stmt))
    }

    fn execute_node(&mut self, stmt: &Stmt) -> Result<(), LoxError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.output.println(&value.to_string());
            }

            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.as_str(), value);
            }

            Stmt::Block(statements) => self.execute_block(statements)?,

            Stmt::If { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
            }
        }

        Ok(())
    }

    /// Runs `statements` in a fresh child scope.
    ///
    /// The enclosing scope is restored on every exit path, including a
    /// fault propagating out of the block.
    pub(crate) fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), LoxError> {
        let saved = self.environment.enter_scope();
        let result = statements.iter().try_for_each(|stmt| self.execute(stmt));
        self.environment.exit_scope(saved);
        result
    }
}
