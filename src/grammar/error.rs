//! Grammar-local error variants, grounded in
//! `examples/original_source/src/parser/grammar.py`'s `UnrecognizedError` /
//! `InvalidArgumentError` and its `p_error` syntax-error handler, plus the
//! teacher's `message` + position `Display` convention.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GrammarError {
    Syntax { text: String, line: usize },
    DuplicateIdentifier { identifier: String, line: usize },
    InvalidArgument { message: String, line: usize },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Syntax { text, line } => write!(f, "syntax error at '{text}' (line {line})"),
            GrammarError::DuplicateIdentifier { identifier, line } => {
                write!(f, "duplicate identifier '{identifier}' (line {line})")
            }
            GrammarError::InvalidArgument { message, line } => write!(f, "{message} (line {line})"),
        }
    }
}

impl Error for GrammarError {}
