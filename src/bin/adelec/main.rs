//! The driver (C9): glues file-read -> parse -> serialize -> file-write.
//!
//! Grounded in the teacher's `src/bin/why/why.rs` (argument parsing via
//! `cli::Cli::init`, `simple_logger::init_with_level`, top-level error
//! logging before `process::exit`) and in
//! `examples/original_source/src/shell/service.py`'s `validate_argument`
//! (existence/file-kind checks, the default `<source>.<interpreter>` output
//! path, the interactive `[yes/no]` overwrite prompt). Everything here is an
//! external collaborator from the core's point of view (`spec.md` §1):
//! argument ingestion, filesystem I/O and the overwrite prompt never touch
//! the lexer/grammar/serializer directly, only `adelec::translate`.

mod cli;
mod error;

use std::error::Error;
use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};
use std::{fs, process};

use cli::Cli;
use error::DriverError;
use log::{error, info};

fn main() {
    let args = Cli::init();
    simple_logger::init_with_level((&args.verbosity).into()).expect("a single logger is installed exactly once");

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(RunOutcome::ArgumentError(e)) => {
            error!("{e} (code {})", e.code() as i32);
            process::exit(2);
        }
        Err(RunOutcome::DeclinedOverwrite) => {
            info!("output file exists and overwrite was declined, nothing written");
            process::exit(0);
        }
        Err(RunOutcome::Fatal(e)) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// `Fatal` boxes any `std::error::Error` from the core pipeline or from I/O,
/// matching the teacher's `src/bin/why/main.rs` (`fn main() -> Result<(),
/// Box<dyn Error>>`). Unlike the teacher, `main` here cannot simply return
/// that `Result` and let the runtime's default handler pick the exit code:
/// `spec.md` §6 mandates distinct codes for an argument error (2) versus a
/// declined overwrite (0) versus any other fatal error (non-zero), which a
/// bare `Err(Box<dyn Error>)` return collapses to a single exit code. This
/// enum keeps that three-way dispatch while still boxing the underlying
/// error at the boundary rather than stringifying it early.
enum RunOutcome {
    ArgumentError(DriverError),
    DeclinedOverwrite,
    Fatal(Box<dyn Error>),
}

impl From<DriverError> for RunOutcome {
    fn from(e: DriverError) -> Self {
        RunOutcome::ArgumentError(e)
    }
}

fn run(args: &Cli) -> Result<(), RunOutcome> {
    let output = validate(args)?;

    if output.exists() {
        if !output.is_file() {
            return Err(DriverError::OutputPathNotAFile { path: output }.into());
        }
        if !args.force && !confirm_overwrite(&output) {
            return Err(RunOutcome::DeclinedOverwrite);
        }
    }

    let source_text = fs::read_to_string(&args.source).map_err(|e| RunOutcome::Fatal(Box::new(e)))?;

    info!("translating '{}' with interpreter '{}'", args.source.display(), args.interpreter);
    let tokens = adelec::lexer::Lexer::lex(&source_text).map_err(|e| RunOutcome::Fatal(Box::new(e)))?;
    let scenario = adelec::grammar::parse(&tokens).map_err(|e| RunOutcome::Fatal(Box::new(e)))?;

    match scenario {
        Some(scenario) => {
            if args.dump_ast {
                info!("parsed scenario:\n{scenario:#?}");
            }
            let text = adelec::serializer::interpret(&scenario, &args.interpreter)
                .map_err(|e| RunOutcome::Fatal(Box::new(e)))?;
            fs::write(&output, text).map_err(|e| RunOutcome::Fatal(Box::new(e)))?;
            info!("wrote '{}'", output.display());
        }
        None => info!("source was empty, nothing to write"),
    }

    Ok(())
}

/// Validates the CLI arguments against the filesystem, matching
/// `examples/original_source/src/shell/service.py`'s `validate_argument`:
/// the source must exist and be a file, the interpreter must be known, and
/// a missing `--output` defaults to `<source-without-extension>.<interpreter>`.
fn validate(args: &Cli) -> Result<PathBuf, DriverError> {
    if !args.source.exists() {
        return Err(DriverError::SourceNotFound { path: args.source.clone() });
    }
    if !args.source.is_file() {
        return Err(DriverError::SourceNotAFile { path: args.source.clone() });
    }
    if !adelec::serializer::is_supported(&args.interpreter) {
        return Err(DriverError::UnknownInterpreterAtCli { name: args.interpreter.clone() });
    }

    Ok(args.output.clone().unwrap_or_else(|| default_output_path(&args.source, &args.interpreter)))
}

fn default_output_path(source: &Path, interpreter: &str) -> PathBuf {
    let mut path = source.to_path_buf();
    path.set_extension(interpreter.to_lowercase());
    path
}

/// The only user-facing blocking operation in the driver (`spec.md` §5).
fn confirm_overwrite(output: &Path) -> bool {
    info!("the output file '{}' already exists, overwrite?", output.display());
    let stdin = io::stdin();
    loop {
        print!("[yes/no] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            return false;
        }
        match line.trim().to_lowercase().as_str() {
            "yes" => return true,
            "no" => return false,
            _ => continue,
        }
    }
}
