//! doxstub — generate documentation stub declarations from `///` comment
//! directives in script sources.
//!
//! Reads a source file line by line, collects contiguous `///` comment
//! blocks together with their `@function` / `@param` / `@return`
//! directives, and writes one namespace-qualified stub declaration per
//! block to stdout, in file order, for consumption by a documentation
//! generator. Everything else in the file is ignored.

mod classify;
mod section;

use anyhow::{Context, Result};
use clap::Parser;
use classify::{Directive, LineClass};
use section::Section;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doxstub",
    about = "Generate documentation stub declarations from /// comment directives"
)]
struct Cli {
    /// Input source file. If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// Also render a comment block that ends at end-of-input without a
    /// following line (such blocks are dropped by default).
    #[arg(long)]
    flush_trailing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut stdout = io::stdout().lock();
    transduce(&input, cli.flush_trailing, &mut stdout)
}

/// Core line loop — extracted from `main` for testability.
///
/// Splitting on `\n` (rather than `str::lines`) keeps the final newline of
/// a terminated file visible as one empty pseudo-line, which is what closes
/// a comment block sitting at the very end of such a file. A block with no
/// line after it at all is dropped unless `flush_trailing` is set.
fn transduce(input: &str, flush_trailing: bool, out: &mut impl Write) -> Result<()> {
    let mut inside = false;
    let mut section = Section::default();

    for line in input.split('\n') {
        match classify::classify(line) {
            LineClass::Directive(Directive::Function) => {
                section.handle_function(line)?;
                inside = true;
            }
            LineClass::Directive(Directive::Param) => {
                section.handle_param(line)?;
                inside = true;
            }
            LineClass::Directive(Directive::Return) => {
                section.handle_return(line);
                inside = true;
            }
            LineClass::Comment => {
                section.handle_comment(line);
                inside = true;
            }
            LineClass::Code => {
                if inside {
                    writeln!(out, "{}", section.render())?;
                    inside = false;
                    section = Section::default();
                }
            }
        }
    }

    if inside && flush_trailing {
        writeln!(out, "{}", section.render())?;
    }

    Ok(())
}
