/*
 * ============================================================================
 *  TreeLox - a tree-walking Lox interpreter
 * ============================================================================
 *
 *  File:     environment.rs
 *  Purpose:  Lexical scope chain for variable bindings.
 *
 *  Author:   Sam Wilcox
 *  Email:    sam@pawx-lang.com
 *  Github:   https://github.com/samwilcox/treelox
 *
 * ----------------------------------------------------------------------------
 *  License
 * ----------------------------------------------------------------------------
 *  This file is part of the TreeLox project.
 *
 *  TreeLox is dual-licensed under the terms of:
 *    • The MIT License
 *    • The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under these licenses is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use std::collections::HashMap;

use tracing::trace;

use crate::error::LoxError;
use crate::lexer::token::Token;
use crate::value::Value;

/// Index of a scope in the environment's scope table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope. Created with the environment, never removed.
    pub const GLOBAL: ScopeId = ScopeId(0);
}

/// One lexical scope: its own bindings plus a link to the enclosing scope.
#[derive(Debug, Default)]
struct Scope {
    values: HashMap<String, Value>,
    enclosing: Option<ScopeId>,
}

/// Variable storage for the interpreter.
///
/// Scopes live in a table and point at their enclosing scope by index,
/// forming a chain toward the global scope. Blocks nest strictly, so the
/// scope being exited is always the last one in the table.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// Creates an environment holding only the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
            current: ScopeId::GLOBAL,
        }
    }

    /// The scope `define` currently writes to.
    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of live scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a child of the current scope and makes it current.
    ///
    /// Returns the scope that was current before, to be handed back to
    /// `exit_scope`.
    pub fn enter_scope(&mut self) -> ScopeId {
        let saved = self.current;
        self.scopes.push(Scope {
            values: HashMap::new(),
            enclosing: Some(saved),
        });
        self.current = ScopeId(self.scopes.len() - 1);
        trace!(depth = self.scopes.len(), "enter scope");
        saved
    }

    /// Discards every scope opened after `saved` and makes `saved` current.
    pub fn exit_scope(&mut self, saved: ScopeId) {
        self.scopes.truncate(saved.0 + 1);
        self.current = saved;
        trace!(depth = self.scopes.len(), "exit scope");
    }

    /// Binds `name` in the current scope, replacing any earlier binding
    /// of the same name there. Never fails.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let scope = &mut self.scopes[self.current.0];
        scope.values.insert(name.into(), value);
    }

    /// Reads the nearest binding of `name`, walking outward.
    pub fn get(&self, name: &Token) -> Result<Value, LoxError> {
        let mut cursor = Some(self.current);

        while let Some(id) = cursor {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.values.get(&name.lexeme) {
                return Ok(value.clone());
            }
            cursor = scope.enclosing;
        }

        Err(undefined(name))
    }

    /// Overwrites the nearest existing binding of `name`, walking outward.
    ///
    /// Never creates a binding: assigning to a name bound nowhere in the
    /// chain is an error.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), LoxError> {
        let mut cursor = Some(self.current);

        while let Some(id) = cursor {
            let scope = &mut self.scopes[id.0];
            if let Some(slot) = scope.values.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
            cursor = scope.enclosing;
        }

        Err(undefined(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

fn undefined(name: &Token) -> LoxError {
    LoxError::reference_error(format!("Undefined variable '{}'.", name.lexeme), name)
}
