/*
 * ==========================================================================
 * TreeLox - a tree-walking Lox interpreter
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords of the language.
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

use crate::lexer::token::TokenKind;

/// The fixed keyword table, as process-wide static data.
pub static KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up the keyword kind for an identifier-shaped word.
///
/// # Returns
/// - `Some(kind)` if the word is a reserved keyword.
/// - `None` if the word should be treated as a normal identifier.
///
/// # Examples
/// ```text
/// while   -> Some(While)
/// whilst  -> None
/// ```
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == word)
        .map(|(_, kind)| *kind)
}
