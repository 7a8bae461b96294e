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

use tracing::trace;

use crate::error::LoxError;
use crate::lexer::token::Token;
use crate::value::Value;

/// Unwraps the number behind a unary operand.
///
/// # Errors
/// `Operand must be a number.` at `operator` for any other value.
pub fn check_number_operand(operator: &Token, operand: &Value) -> Result<f64, LoxError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => {
            trace!(operator = %operator, operand = operand.type_name(), "non-number operand");
            Err(LoxError::type_error("Operand must be a number.", operator))
        }
    }
}

/// Unwraps both operands of an arithmetic or comparison operator.
///
/// # Errors
/// `Operands must be a number.` at `operator` unless both are numbers.
pub fn check_number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), LoxError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => {
            trace!(
                operator = %operator,
                left = left.type_name(),
                right = right.type_name(),
                "non-number operands"
            );
            Err(LoxError::type_error("Operands must be a number.", operator))
        }
    }
}
