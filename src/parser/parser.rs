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

use tracing::{debug, trace};

use crate::ast::Stmt;
use crate::diagnostics::Reporter;
use crate::error::LoxError;
use crate::lexer::token::{Token, TokenKind};

/// Result of a single grammar production.
///
/// An `Err` is a parse fault: it unwinds to the nearest `declaration`,
/// which reports it and resynchronizes.
pub type ParseResult<T> = Result<T, LoxError>;

/// The core recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The reporter receiving every parse fault
///
/// The grammar itself lives in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'r> {
    /// Complete list of tokens to be parsed. Always ends with `Eof`.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    pub(crate) reporter: &'r mut dyn Reporter,
}

/// Public entry point for the parsing phase.
///
/// # Returns
/// Every statement that parsed successfully, in source order. Statements
/// containing a syntax error are reported and left out.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
pub fn parse(tokens: Vec<Token>, reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, reporter);
    parser.parse()
}

impl<'r> Parser<'r> {
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut dyn Reporter) -> Self {
        // The cursor helpers rely on a trailing Eof.
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::symbol(TokenKind::Eof, "", line));
        }

        Self {
            tokens,
            current: 0,
            reporter,
        }
    }

    /// Parses the entire token stream into a list of top-level statements.
    ///
    /// # Behavior
    /// - Statements are parsed in strict left-to-right order.
    /// - A malformed statement is reported, skipped, and parsing resumes at
    ///   the next statement boundary.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }

        debug!(count = stmts.len(), "parse finished");
        stmts
    }

    /// declaration → varDecl | statement
    ///
    /// This is the recovery boundary: a fault anywhere inside the statement
    /// is reported here, tokens are discarded up to the next boundary, and
    /// `None` is returned in place of the broken statement.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.reporter.error(&err);
                self.synchronize();
                None
            }
        }
    }

    /// Panic-mode recovery.
    ///
    /// Discards tokens until just after a `;` or just before a token that
    /// starts a statement.
    pub(crate) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }

            if self.peek().kind.starts_statement() {
                break;
            }

            self.advance();
        }

        trace!(resume_at = %self.peek(), line = self.peek().line, "resynchronized");
    }
}
