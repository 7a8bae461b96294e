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
 * ============================================================================
 */

use tracing::trace;

use crate::ast::Expr;
use crate::error::LoxError;
use crate::interpreter::helpers::{check_number_operand, check_number_operands};
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::lexer::token::{Token, TokenKind};
use crate::value::Value;

impl Interpreter {
    /// Evaluates a single expression and returns its runtime value.
    ///
    /// This is the **core expression dispatcher**. Every expression in the
    /// language eventually passes through this function.
    ///
    /// # Errors
    /// A runtime fault (bad operand types, undefined variable) carrying the
    /// offending token. Evaluation stops at the first fault.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, LoxError> {
        ensure_sufficient_stack(|| self.evaluate_node(expr))
    }

    fn evaluate_node(&mut self, expr: &Expr) -> Result<Value, LoxError> {
        match expr {
            // ---------------------------------------------------------------------
            // Literals & Grouping
            // ---------------------------------------------------------------------
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Grouping(inner) => self.evaluate(inner),

            // ---------------------------------------------------------------------
            // Variables
            // ---------------------------------------------------------------------
            Expr::Variable { name } => self.environment.get(name),

            // Assignment is an expression: it yields the assigned value.
            Expr::Assign { name, value } => {
                let assigned = self.evaluate(value)?;
                self.environment.assign(name, assigned.clone())?;
                Ok(assigned)
            }

            // ---------------------------------------------------------------------
            // Logical Operators (short-circuit, return the deciding operand)
            // ---------------------------------------------------------------------
            Expr::Logical { left, operator, right } => {
                let left = self.evaluate(left)?;

                let short_circuits = match operator.kind {
                    TokenKind::Or => left.is_truthy(),
                    _ => !left.is_truthy(),
                };

                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            // ---------------------------------------------------------------------
            // Unary Operators
            // ---------------------------------------------------------------------
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;

                match operator.kind {
                    TokenKind::Minus => Ok(Value::Number(-check_number_operand(operator, &right)?)),
                    TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
                    _ => Err(LoxError::type_error("Invalid unary operator.", operator)),
                }
            }

            // ---------------------------------------------------------------------
            // Binary Operators
            // ---------------------------------------------------------------------
            Expr::Binary { left, operator, right } => {
                // Right operand first.
                let right = self.evaluate(right)?;
                let left = self.evaluate(left)?;
                binary(operator, left, right)
            }
        }
    }
}

/// Applies a binary operator to two evaluated operands.
fn binary(operator: &Token, left: Value, right: Value) -> Result<Value, LoxError> {
    match operator.kind {
        // -------------------------------
        // Arithmetic (IEEE-754, `1 / 0` is infinity)
        // -------------------------------
        TokenKind::Minus => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a - b))
        }
        TokenKind::Slash => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a / b))
        }
        TokenKind::Star => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a * b))
        }

        TokenKind::Plus => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
            (left, right) => {
                trace!(
                    left = left.type_name(),
                    right = right.type_name(),
                    "mismatched '+' operands"
                );
                Err(LoxError::type_error(
                    "Operands must be two numbers or two strings.",
                    operator,
                ))
            }
        },

        // -------------------------------
        // Comparison
        // -------------------------------
        TokenKind::Greater => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Boolean(a > b))
        }
        TokenKind::GreaterEqual => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Boolean(a >= b))
        }
        TokenKind::Less => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Boolean(a < b))
        }
        TokenKind::LessEqual => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Boolean(a <= b))
        }

        // -------------------------------
        // Equality (no coercion; nil equals only nil)
        // -------------------------------
        TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
        TokenKind::BangEqual => Ok(Value::Boolean(left != right)),

        _ => Err(LoxError::type_error("Invalid binary operator.", operator)),
    }
}
