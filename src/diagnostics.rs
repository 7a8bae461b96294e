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

use crate::error::LoxError;

/// Sink for every scan error, parse error and runtime fault.
///
/// The lexer, parser and interpreter never write diagnostics themselves;
/// they hand a `(line, location, message)` triple to a `Reporter` and
/// carry on (or unwind, for runtime faults).
pub trait Reporter {
    /// Receives one diagnostic.
    ///
    /// `location` is the context string built by `LoxError`
    /// (`""`, `" at end"`, `" at 'lexeme'"`).
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// Forwards a structured error as a triple.
    fn error(&mut self, error: &LoxError) {
        self.report(error.line, &error.location, &error.message);
    }
}

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// to stderr.
///
/// This printer:
/// - Formats errors with file/line information
/// - Displays the offending source line when the source is known
///
/// The output is inspired by `rustc` diagnostics, simplified to remain
/// readable without color.
pub struct DiagnosticPrinter {
    /// Full source text of the current run.
    ///
    /// Empty until `set_source` is called; without it only the header
    /// line is printed.
    source: String,

    /// Name of the source (file name, or `<repl>`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: String::new(),
        }
    }

    /// Replaces the source text used to quote offending lines.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Renders one diagnostic as a string.
    ///
    /// # Output Example
    /// ```text
    /// error at '+': Operands must be two numbers or two strings.
    ///   --> main.lox:12
    ///    |
    ///  12 | print 1 + "a";
    /// ```
    pub fn render(&self, line: usize, location: &str, message: &str) -> String {
        let mut out = format!(
            "error{}: {}\n  --> {}:{}",
            location, message, self.file_name, line
        );

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        if let Some(src_line) = self.source.lines().nth(line.saturating_sub(1)) {
            out.push_str("\n   |\n");
            out.push_str(&format!("{:>3} | {}", line, src_line));
        }

        out
    }
}

impl Reporter for DiagnosticPrinter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("{}", self.render(line, location, message));
    }
}

/// One reported diagnostic, as received by a `DiagnosticBuffer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

/// Reporter that keeps every diagnostic in memory.
///
/// Used by tests and by hosts that want to present errors themselves.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Messages only, in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for DiagnosticBuffer {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_keeps_triples_in_order() {
        let mut buffer = DiagnosticBuffer::new();
        buffer.report(1, "", "Unexpected character.");
        buffer.error(&LoxError::scan_error("Unterminated string.", 2));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.messages(), vec!["Unexpected character.", "Unterminated string."]);
        assert_eq!(buffer.diagnostics[1].line, 2);
    }

    #[test]
    fn printer_quotes_the_source_line() {
        let mut printer = DiagnosticPrinter::new("main.lox");
        printer.set_source("var a = 1;\nprint a +;\n");

        let rendered = printer.render(2, " at ';'", "Expect expression.");
        assert_eq!(
            rendered,
            "error at ';': Expect expression.\n  --> main.lox:2\n   |\n  2 | print a +;"
        );
    }

    #[test]
    fn printer_without_source_prints_header_only() {
        let printer = DiagnosticPrinter::new("<repl>");
        assert_eq!(
            printer.render(9, "", "Unexpected character."),
            "error: Unexpected character.\n  --> <repl>:9"
        );
    }
}
