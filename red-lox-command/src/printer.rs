use std::{io::Write, process::ExitCode};

use anyhow::Context;
use red_lox_ast::{printer::AstPrinter, reporter::WriteReporter};

use crate::sample::{Sample, Tree};

/// Writes the dump of `sample` to `out` and its diagnostics to `err`. Returns
/// the number of diagnostics reported.
pub fn print_sample<O, E>(sample: Sample, out: &mut O, err: &mut E) -> anyhow::Result<usize>
where
    O: Write,
    E: Write,
{
    log::debug!("printing sample '{}'", sample);
    let mut reporter = WriteReporter::new(err);
    let dump = {
        let mut printer = AstPrinter::new(&mut reporter);
        match sample.tree() {
            Tree::Expression(expr) => printer.print_expr(&expr),
            Tree::Program(stmts) => printer.print(&stmts),
        }
    };
    writeln!(out, "{}", dump).context("Failed to write the dump")?;
    out.flush().context("Failed to flush the dump")?;
    Ok(reporter.reported())
}

pub fn run_printer<O, E>(sample: Sample, out: &mut O, err: &mut E) -> ExitCode
where
    O: Write,
    E: Write,
{
    match print_sample(sample, out, err) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(reported) => {
            log::info!("{} diagnostic(s) reported for sample '{}'", reported, sample);
            ExitCode::FAILURE
        }
        Err(e) => {
            if let Err(write_error) = writeln!(err, "{:#}", e) {
                log::error!("{:#} (and failed to report it: {})", e, write_error);
            }
            ExitCode::FAILURE
        }
    }
}
