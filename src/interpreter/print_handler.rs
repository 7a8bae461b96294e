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

//! Destination for `print` statement output.
//!
//! - Stdout: the default for the command-line runner
//! - Buffer: captured text, for tests and embedding hosts
//! - Silent: discards everything

/// Where `print` writes, one line per executed statement.
#[derive(Debug, Default)]
pub enum PrintHandler {
    #[default]
    Stdout,
    Buffer(String),
    Silent,
}

impl PrintHandler {
    /// A handler capturing into an empty buffer.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(String::new())
    }

    /// Writes one line (a newline is appended).
    pub fn println(&mut self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(buf) => {
                buf.push_str(line);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Captured output so far. Empty for handlers that don't capture.
    pub fn output(&self) -> &str {
        match self {
            PrintHandler::Buffer(buf) => buf,
            PrintHandler::Stdout | PrintHandler::Silent => "",
        }
    }

    /// Returns the captured output and clears the buffer.
    pub fn take_output(&mut self) -> String {
        match self {
            PrintHandler::Buffer(buf) => std::mem::take(buf),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}
