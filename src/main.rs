use std::{
    io::{stderr, stdout},
    process::ExitCode,
};

use clap::Parser;

use red_lox_command::{printer::run_printer, sample::Sample};

/// Dumps one of the built-in Lox syntax trees as an s-expression.
#[derive(Debug, Parser)]
struct Cli {
    /// Tree to print: expression, program or invalid.
    #[arg(short, long, default_value_t = Sample::Program)]
    sample: Sample,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    run_printer(cli.sample, &mut stdout(), &mut stderr())
}
