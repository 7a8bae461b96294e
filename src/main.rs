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


use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use treelox::diagnostics::DiagnosticPrinter;
use treelox::interpreter::print_handler::PrintHandler;
use treelox::{Lox, Options, RunStatus};

#[derive(Debug, ClapParser)]
#[command(
    name = "treelox",
    about = "Runs a Lox script, or starts an interactive prompt when no script is given.",
    version
)]
struct Args {
    /// Path to a Lox source file.
    script: Option<PathBuf>,

    /// Print every scanned token as a JSON line before parsing.
    #[arg(long)]
    print_tokens: bool,

    /// Print each parsed statement in prefix form before execution.
    #[arg(long)]
    print_ast: bool,
}

fn main() -> Result<ExitCode> {
    install_tracing();

    let args = Args::parse();
    let options = Options {
        print_tokens: args.print_tokens,
        print_ast: args.print_ast,
    };

    match &args.script {
        Some(path) => run_file(path, options),
        None => {
            run_prompt(options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_file(path: &Path, options: Options) -> Result<ExitCode> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut reporter = DiagnosticPrinter::new(path.display().to_string());
    reporter.set_source(source.as_str());

    let mut lox = Lox::new(PrintHandler::Stdout, reporter).with_options(options);
    let status = lox.run(&source);
    info!(script = %path.display(), ?status, "finished");

    Ok(ExitCode::from(status.exit_code()))
}

fn run_prompt(options: Options) -> Result<()> {
    let mut lox =
        Lox::new(PrintHandler::Stdout, DiagnosticPrinter::new("<repl>")).with_options(options);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read from stdin")?;
        if line.trim() == "exit" {
            break;
        }

        // Errors are reported and the prompt carries on.
        lox.reporter_mut().set_source(line.as_str());
        let status = lox.run(&line);
        if status != RunStatus::Ok {
            debug!(?status, "line failed");
        }
    }

    Ok(())
}

fn install_tracing() {
    // Diagnostics own stderr by default; RUST_LOG opts into more.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
