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

use crate::{lexer::token::Token, value::Value};

/// All expression forms. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Grouping(Box<Expr>),
    Unary { operator: Token, right: Box<Expr> },
    Binary { left: Box<Expr>, operator: Token, right: Box<Expr> },
    /// `and` / `or`; the right side is only evaluated when needed.
    Logical { left: Box<Expr>, operator: Token, right: Box<Expr> },
    Variable { name: Token },
    Assign { name: Token, value: Box<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }
}

/// Tears the tree down with an explicit worklist. The derived drop glue
/// would recurse once per level and overflow on long operator chains.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves every boxed child into `out`, leaving `nil` literals behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Grouping(child)
            | Expr::Unary { right: child, .. }
            | Expr::Assign { value: child, .. } => out.push(detach(child)),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                out.push(detach(left));
                out.push(detach(right));
            }
            Expr::Literal(_) | Expr::Variable { .. } => {}
        }
    }
}

fn detach(slot: &mut Box<Expr>) -> Expr {
    std::mem::replace(&mut **slot, Expr::Literal(Value::Nil))
}
