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

/// Character-level scanner state machine.
pub mod lexer;

/// Token kinds and the token record.
pub mod token;

/// Reserved word table.
pub mod keywords;


use tracing::debug;

use crate::diagnostics::Reporter;
use lexer::Lexer;
use token::Token;

/// Public entry point for the scanning phase.
///
/// Converts source text into a token sequence that always ends with an
/// `Eof` token. Lexical errors go to `reporter`; scanning never stops
/// early, so one pass surfaces every bad character.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
pub fn tokenize(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut lexer = Lexer::new(source, reporter);
    lexer.scan_tokens();
    debug!(count = lexer.tokens.len(), "scan finished");
    lexer.tokens
}
