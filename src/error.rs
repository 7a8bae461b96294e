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

use thiserror::Error;

use crate::lexer::token::{Token, TokenKind};

/// The pipeline stage a fault was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reported by the lexer; scanning continues.
    Scan,
    /// Raised by a parser production; recovered at the next statement.
    Parse,
    /// Raised while evaluating; aborts the current `interpret` call.
    Runtime,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct LoxError {
    /// Stable error code (E_SCAN, E_PARSE, E_TYPE, E_REFERENCE)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// 1-based source line
    pub line: usize,

    /// Location context, e.g. `" at end"` or `" at 'x'"`. Empty for scan errors.
    pub location: String,

    pub phase: Phase,
}

impl LoxError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        phase: Phase,
        message: impl Into<String>,
        line: usize,
        location: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            location: location.into(),
            phase,
        }
    }

    /// Lexical error (unexpected character, unterminated string)
    pub fn scan_error(message: impl Into<String>, line: usize) -> Self {
        Self::new("E_SCAN", Phase::Scan, message, line, "")
    }

    /// Syntax error at `token`
    pub fn parse_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_PARSE", Phase::Parse, message, token.line, location_of(token))
    }

    /// Type error (invalid operand types)
    pub fn type_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_TYPE", Phase::Runtime, message, token.line, location_of(token))
    }

    /// Reference error (undefined variable)
    pub fn reference_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_REFERENCE", Phase::Runtime, message, token.line, location_of(token))
    }

    pub fn is_runtime(&self) -> bool {
        self.phase == Phase::Runtime
    }
}

/// Location context for a diagnostic pointing at `token`.
fn location_of(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, lexeme: &str, line: usize) -> Token {
        Token::new(kind, lexeme, Value::Nil, line)
    }

    #[test]
    fn scan_errors_have_no_location() {
        let err = LoxError::scan_error("Unexpected character.", 3);
        assert_eq!(err.to_string(), "[line 3] Error: Unexpected character.");
        assert_eq!(err.phase, Phase::Scan);
    }

    #[test]
    fn parse_errors_point_at_the_token() {
        let err = LoxError::parse_error("Expect expression.", &token(TokenKind::Semicolon, ";", 2));
        assert_eq!(err.to_string(), "[line 2] Error at ';': Expect expression.");
    }

    #[test]
    fn errors_at_eof_say_at_end() {
        let err = LoxError::parse_error("Expect ';' after value.", &token(TokenKind::Eof, "", 7));
        assert_eq!(err.location, " at end");
        assert_eq!(err.line, 7);
    }

    #[test]
    fn runtime_constructors_set_codes() {
        let minus = token(TokenKind::Minus, "-", 1);
        assert_eq!(LoxError::type_error("Operand must be a number.", &minus).code, "E_TYPE");

        let name = token(TokenKind::Identifier, "x", 4);
        let err = LoxError::reference_error("Undefined variable 'x'.", &name);
        assert_eq!(err.code, "E_REFERENCE");
        assert!(err.is_runtime());
    }
}
