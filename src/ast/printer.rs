/*
 * ==========================================================================
 * TreeLox - a tree-walking Lox interpreter
 * ==========================================================================
 *
 * File:     printer.rs
 * Purpose:  Renders AST nodes as parenthesized prefix forms for debugging
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

use std::fmt;

use crate::ast::{Expr, Stmt};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// ============================================================================
/// Expression rendering
/// ============================================================================
/// Operators come first, operands follow, every compound node is wrapped in
/// parentheses. This makes precedence and associativity visible:
///
///   - `-2 * 3 + 4`      → `(+ (* (- 2) 3) 4)`
///   - `(1 + 2)`         → `(group (+ 1 2))`
///   - `a = b = 1`       → `(= a (= b 1))`
///   - `"hi"`            → `"hi"`
/// ============================================================================
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Literal(Value::String(s)) => write!(f, "\"{s}\""),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
            Expr::Unary { operator, right } => write!(f, "({operator} {right})"),
            Expr::Binary { left, operator, right }
            | Expr::Logical { left, operator, right } => {
                write!(f, "({operator} {left} {right})")
            }
            Expr::Variable { name } => write!(f, "{name}"),
            Expr::Assign { name, value } => write!(f, "(= {name} {value})"),
        })
    }
}

/// Statements use the same prefix style: `(print e)`, `(var x e)`,
/// `(block ...)`, `(if c t e)`, `(while c b)` and `(; e)` for a bare
/// expression statement.
impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "(; {expr})"),
            Stmt::Print(expr) => write!(f, "(print {expr})"),
            Stmt::Var { name, initializer: Some(init) } => write!(f, "(var {name} {init})"),
            Stmt::Var { name, initializer: None } => write!(f, "(var {name})"),
            Stmt::Block(statements) => {
                write!(f, "(block")?;
                for stmt in statements {
                    write!(f, " {stmt}")?;
                }
                write!(f, ")")
            }
            Stmt::If { condition, then_branch, else_branch } => match else_branch {
                Some(otherwise) => write!(f, "(if {condition} {then_branch} {otherwise})"),
                None => write!(f, "(if {condition} {then_branch})"),
            },
            Stmt::While { condition, body } => write!(f, "(while {condition} {body})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::{Token, TokenKind};
    use pretty_assertions::assert_eq;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::symbol(kind, lexeme, 1)
    }

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, Value::from(name), 1)
    }

    #[test]
    fn nested_expression_shows_structure() {
        let expr = Expr::binary(
            Expr::unary(op(TokenKind::Minus, "-"), Expr::Literal(Value::Number(123.0))),
            op(TokenKind::Star, "*"),
            Expr::Grouping(Box::new(Expr::Literal(Value::Number(45.67)))),
        );
        assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn literals_print_by_value() {
        assert_eq!(Expr::Literal(Value::Nil).to_string(), "nil");
        assert_eq!(Expr::Literal(Value::Boolean(false)).to_string(), "false");
        assert_eq!(Expr::Literal(Value::from("a b")).to_string(), "\"a b\"");
    }

    #[test]
    fn statements_render_in_prefix_form() {
        let program = Stmt::Block(vec![
            Stmt::Var {
                name: ident("i"),
                initializer: Some(Expr::Literal(Value::Number(0.0))),
            },
            Stmt::While {
                condition: Expr::Variable { name: ident("go") },
                body: Box::new(Stmt::Print(Expr::Assign {
                    name: ident("i"),
                    value: Box::new(Expr::Literal(Value::Number(1.0))),
                })),
            },
        ]);
        assert_eq!(program.to_string(), "(block (var i 0) (while go (print (= i 1))))");
    }

    #[test]
    fn if_without_else() {
        let stmt = Stmt::If {
            condition: Expr::Literal(Value::Boolean(true)),
            then_branch: Box::new(Stmt::Expression(Expr::Variable { name: ident("x") })),
            else_branch: None,
        };
        assert_eq!(stmt.to_string(), "(if true (; x))");
    }
}
