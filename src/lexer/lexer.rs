/*
 * ==========================================================================
 * TreeLox - a tree-walking Lox interpreter
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Single-pass character scanner turning source text into tokens.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * GitHub:    https://github.com/samwilcox/treelox
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

use tracing::trace;

use crate::diagnostics::Reporter;
use crate::error::LoxError;
use crate::lexer::keywords::keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::value::Value;

pub struct Lexer<'r> {
    chars: Vec<char>,
    /// First character of the token being scanned.
    start: usize,
    current: usize,
    line: usize,
    pub tokens: Vec<Token>,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Lexer<'r> {
    /// Creates a new lexer instance from raw source code.
    ///
    /// # Parameters
    /// - `source`: UTF-8 source text.
    /// - `reporter`: receives every lexical error.
    ///
    /// # Returns
    /// A lexer with both cursors at `0`, the line counter at `1` and an
    /// empty token buffer.
    pub fn new(source: &str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            reporter,
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Ignores whitespace and `//` comments
    /// - Reports bad characters and unterminated strings, then keeps going
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// Results are written into `self.tokens`.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
            .push(Token::symbol(TokenKind::Eof, "", self.line));
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// # Behavior
    /// - `!`, `=`, `<`, `>` look one character ahead for a trailing `=`
    /// - `//` starts a comment running to the end of the line
    /// - Updates the line counter on every newline
    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character operators
            '!' => self.add_equals_variant(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.add_equals_variant(TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.add_equals_variant(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.add_equals_variant(TokenKind::Greater, TokenKind::GreaterEqual),

            // Comment or division
            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.reporter
                    .error(&LoxError::scan_error("Unexpected character.", self.line));
            }
        }
    }

    fn add_equals_variant(&mut self, bare: TokenKind, with_equals: TokenKind) {
        let kind = if self.match_char('=') { with_equals } else { bare };
        self.add_token(kind);
    }

    /// Scans a string literal. The opening quote has been consumed.
    ///
    /// No escape sequences are processed; the literal is the exact text
    /// between the quotes, newlines included.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter
                .error(&LoxError::scan_error("Unterminated string.", self.line));
            return;
        }

        self.advance(); // closing quote

        // Trim exactly one quote from each end.
        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(TokenKind::String, Value::String(value));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' with no digit after it is left for the next token.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(number) => self.add_literal_token(TokenKind::Number, Value::Number(number)),
            Err(_) => self
                .reporter
                .error(&LoxError::scan_error("Invalid number literal.", self.line)),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = self.lexeme();
        match keyword(&text) {
            Some(kind) => self.add_token(kind),
            None => self.add_literal_token(TokenKind::Identifier, Value::String(text)),
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Value::Nil);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Value) {
        let token = Token::new(kind, self.lexeme(), literal, self.line);
        trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "scanned token");
        self.tokens.push(token);
    }

    /// Source text between the two cursors.
    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
