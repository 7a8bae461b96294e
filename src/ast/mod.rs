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

pub mod expr;
pub mod stmt;

/// `Display` impls rendering nodes in parenthesized prefix form.
pub mod printer;

pub use expr::Expr;
pub use stmt::Stmt;
