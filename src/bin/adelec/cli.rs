//! The command-line surface for `adelec`.
//!
//! Grounded in the teacher's `src/bin/why/cli.rs` (`clap` derive struct,
//! `LogLevel` `ValueEnum` with numeric aliases) and in
//! `examples/original_source/src/shell/options.py`'s `Option` enum
//! (`-s/--source`, `-i/--interpreter`, `-o/--output`, `-f/--force`). Unlike
//! `why`, there is exactly one job to do, so there is no
//! `#[command(subcommand)]` split.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Translates ADeLe attack scenarios to XML")]
pub struct Cli {
    /// Path to the ADeLe source file.
    #[arg(short, long)]
    pub source: PathBuf,

    /// Name of the serializer to use. Currently only "xml" exists.
    #[arg(short, long)]
    pub interpreter: String,

    /// Destination path. Defaults to `<source-without-extension>.<interpreter>`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file without prompting.
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Specify the log level of the translator.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,

    /// Print the parsed scenario before serializing it (debug-only).
    #[arg(long, default_value_t = false)]
    pub dump_ast: bool,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
