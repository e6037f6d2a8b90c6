//! Lexer-local error variants, grounded in the teacher's
//! `typechecker::error::TypeError` shape (`message` + position, `Display`
//! formatting `"{message} ({line})"`), trimmed to the line-only granularity
//! `examples/original_source/src/parser/lexer.py` actually tracks.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    IllegalCharacter { ch: char, line: usize },
    MalformedNumber { text: String, line: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IllegalCharacter { ch, line } => {
                write!(f, "illegal character '{ch}' (line {line})")
            }
            LexError::MalformedNumber { text, line } => {
                write!(f, "malformed number '{text}' (line {line})")
            }
        }
    }
}

impl Error for LexError {}
