//! `adelec`: lexes, parses and serializes ADeLe attack scenarios to XML.
//!
//! This crate is the language front-end pipeline only (C1–C8). It never
//! initializes a logger itself — library code logs through the `log` facade
//! and leaves backend selection to the binary crate, matching the teacher's
//! `why_lib`/`why` split.

pub mod context;
pub mod grammar;
pub mod lexeme;
pub mod lexer;
pub mod model;
pub mod scope;
pub mod serializer;
pub mod staging;
pub mod symbol;

pub use grammar::GrammarError;
pub use lexer::LexError;
pub use model::Scenario;
pub use serializer::SerializeError;

/// Runs the whole front end over source text: lex, parse, serialize.
/// `None` means the source was empty — no node was constructed and no
/// output should be produced (`spec.md` §8's first end-to-end scenario).
pub fn translate(source: &str, interpreter_name: &str) -> Result<Option<String>, TranslateError> {
    let tokens = lexer::Lexer::lex(source)?;
    let scenario = match grammar::parse(&tokens)? {
        Some(scenario) => scenario,
        None => return Ok(None),
    };
    Ok(Some(serializer::interpret(&scenario, interpreter_name)?))
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    Lex(LexError),
    Grammar(GrammarError),
    Serialize(SerializeError),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::Lex(e) => write!(f, "{e}"),
            TranslateError::Grammar(e) => write!(f, "{e}"),
            TranslateError::Serialize(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<LexError> for TranslateError {
    fn from(e: LexError) -> Self {
        TranslateError::Lex(e)
    }
}

impl From<GrammarError> for TranslateError {
    fn from(e: GrammarError) -> Self {
        TranslateError::Grammar(e)
    }
}

impl From<SerializeError> for TranslateError {
    fn from(e: SerializeError) -> Self {
        TranslateError::Serialize(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_translates_to_nothing() {
        assert_eq!(translate("", "xml").unwrap(), None);
    }

    #[test]
    fn minimal_scenario_translates_to_xml() {
        let xml = translate("scenario { }", "xml").unwrap().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<Scenario entity=\"object\">\n"));
    }

    #[test]
    fn unknown_interpreter_surfaces_through_translate() {
        let err = translate("scenario { }", "yaml").unwrap_err();
        assert!(matches!(err, TranslateError::Serialize(SerializeError::UnknownInterpreter { .. })));
    }
}
