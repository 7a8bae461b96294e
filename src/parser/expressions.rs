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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire expression grammar**.
 *
 * Parsing order follows precedence, lowest first:
 *
 *   assignment → or → and → equality → comparison → addition
 *              → multiplication → unary → primary
 *
 * Every binary level folds left iteratively, so `a - b - c` groups as
 * `(a - b) - c` and a long operand chain never deepens the call stack.
 *
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::error::LoxError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{ParseResult, Parser};
use crate::value::Value;

impl Parser<'_> {
    /// expression → assignment
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// assignment → IDENTIFIER "=" assignment | logic_or
    ///
    /// The target is parsed as an ordinary expression first, then checked:
    /// only a bare variable may be assigned to. Right-associative through
    /// the recursive call.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logical_or()?;

        if self.match_kind(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match &expr {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name: name.clone(),
                    value: Box::new(value),
                }),
                _ => Err(LoxError::parse_error("Invalid assignment target.", &equals)),
            };
        }

        Ok(expr)
    }

    /// logic_or → logic_and ( "or" logic_and )*
    fn logical_or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.logical_and()?;

        while self.match_kind(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.logical_and()?;
            expr = Expr::logical(expr, operator, right);
        }

        Ok(expr)
    }

    /// logic_and → equality ( "and" equality )*
    fn logical_and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.match_kind(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::logical(expr, operator, right);
        }

        Ok(expr)
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.match_kind(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// comparison → addition ( ( ">" | ">=" | "<" | "<=" ) addition )*
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.addition()?;

        while self.match_kind(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.addition()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// addition → multiplication ( ( "-" | "+" ) multiplication )*
    fn addition(&mut self) -> ParseResult<Expr> {
        let mut expr = self.multiplication()?;

        while self.match_kind(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.multiplication()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// multiplication → unary ( ( "/" | "*" ) unary )*
    fn multiplication(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_kind(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// unary → ( "!" | "-" ) unary | primary
    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_kind(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// primary → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER
    ///         | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_kind(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Boolean(false)));
        }

        if self.match_kind(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Boolean(true)));
        }

        if self.match_kind(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Nil));
        }

        if self.match_kind(&[TokenKind::Number, TokenKind::String]) {
            return Ok(Expr::Literal(self.previous().literal.clone()));
        }

        if self.match_kind(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable {
                name: self.previous().clone(),
            });
        }

        if self.match_kind(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(self.error_at_current("Expect expression."))
    }
}
