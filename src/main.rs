use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use calcrepl::{Outcome, Session, SessionOptions};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// calcrepl reads arithmetic expressions and prints their values.
///
/// Each expression is evaluated as soon as it is complete. The session stops
/// at the end of input, or at the first error unless `--keep-going` is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not print the `> ` prompt. Useful when piping input.
    #[arg(short, long)]
    quiet: bool,

    /// Report errors and continue with the next line instead of stopping.
    #[arg(short, long)]
    keep_going: bool,

    /// Log more detail to stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Read expressions from this file instead of standard input.
    file: Option<PathBuf>,
}

const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(level_filter(args.verbose)).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let options = SessionOptions { prompt:     !args.quiet,
                                   keep_going: args.keep_going, };
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let result = if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        Session::new(BufReader::new(file), options).run(&mut out, &mut err)
    } else {
        Session::new(io::stdin().lock(), options).run(&mut out, &mut err)
    };

    match result {
        Ok(Outcome::Finished) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}
