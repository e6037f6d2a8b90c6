//! The grammar (C7): a hand-rolled recursive-descent parser over a token
//! stream, production-for-production grounded in
//! `examples/original_source/src/parser/grammar.py`'s `ply.yacc` rules
//! (`p_entry_point`, `p_scenario_compound_statement`,
//! `p_scenario_block_content`, `p_configuration_compound_statement`,
//! `p_configuration_action*`, `p_action_set_*`, the literal productions, and
//! `p_attack_compound_statement`). Runs left-to-right with no error
//! recovery: the first syntax error aborts the parse.
//!
//! Unlike the original's module-level `SymbolTable`/`CurrentScope`
//! classmethod state, every production here operates against a single
//! `ParserContext` threaded by `&mut` reference (Design Notes).

pub mod error;

use crate::context::ParserContext;
use crate::lexeme::{Keyword, LexemeSet, LiteralKind, Punctuation};
use crate::lexer::{Token, TokenKind};
use crate::model;
use crate::staging::StagingKind;

pub use error::GrammarError;

/// Primitive type keywords, valid at the head of an `attack` block
/// declaration.
fn is_type_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::BOOLEAN
            | Keyword::CHAR
            | Keyword::INTEGER
            | Keyword::FLOAT
            | Keyword::STRING
            | Keyword::UINT8
            | Keyword::UINT16
            | Keyword::UINT32
            | Keyword::UINT64
            | Keyword::SINT8
            | Keyword::SINT16
            | Keyword::SINT32
            | Keyword::SINT64
            | Keyword::FLOAT32
            | Keyword::FLOAT64
            | Keyword::MESSAGE
    )
}

/// Parses a complete token stream into an optional `Scenario`. Empty input
/// parses to `Ok(None)` with no node constructed, matching `spec.md` §8's
/// first boundary behavior.
pub fn parse(tokens: &[Token]) -> Result<Option<model::Scenario>, GrammarError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let mut parser = Parser { tokens, pos: 0, ctx: ParserContext::new() };
    let scenario = parser.parse_scenario_compound_statement()?;
    if parser.pos != parser.tokens.len() {
        let tok = &parser.tokens[parser.pos];
        return Err(GrammarError::Syntax { text: tok.text.clone(), line: tok.line });
    }
    Ok(Some(scenario))
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    ctx: ParserContext,
}

impl<'t> Parser<'t> {
    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn current_line(&self) -> usize {
        self.current().map(|t| t.line).or_else(|| self.tokens.last().map(|t| t.line)).unwrap_or(0)
    }

    fn syntax_error_here(&self) -> GrammarError {
        match self.current() {
            Some(tok) => GrammarError::Syntax { text: tok.text.clone(), line: tok.line },
            None => GrammarError::Syntax { text: "<end of input>".to_string(), line: self.current_line() },
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn peek_keyword(&self) -> Option<Keyword> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Keyword(k)) => Some(k),
            _ => None,
        }
    }

    fn peek_literal_kind(&self) -> Option<LiteralKind> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Literal(l)) => Some(l),
            _ => None,
        }
    }

    fn at_punct(&self, p: Punctuation) -> bool {
        matches!(self.current().map(|t| t.kind), Some(TokenKind::Punctuation(q)) if q == p)
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<(), GrammarError> {
        if self.peek_keyword() == Some(kw) {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error_here())
        }
    }

    fn expect_punct(&mut self, p: Punctuation) -> Result<(), GrammarError> {
        if self.at_punct(p) {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error_here())
        }
    }

    fn expect_literal(&mut self, kind: LiteralKind) -> Result<String, GrammarError> {
        if self.peek_literal_kind() == Some(kind) {
            let text = self.current().unwrap().text.clone();
            self.advance();
            Ok(text)
        } else {
            Err(self.syntax_error_here())
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, usize), GrammarError> {
        if self.peek_literal_kind() == Some(LiteralKind::LITERAL_IDENTIFIER) {
            let tok = self.current().unwrap();
            let result = (tok.text.clone(), tok.line);
            self.advance();
            Ok(result)
        } else {
            Err(self.syntax_error_here())
        }
    }

    fn parse_semicolons(&mut self) -> Result<(), GrammarError> {
        self.expect_punct(Punctuation::SEMICOLON)?;
        while self.at_punct(Punctuation::SEMICOLON) {
            self.advance();
        }
        Ok(())
    }

    fn parse_literal_string(&mut self) -> Result<model::Literal, GrammarError> {
        let text = self.expect_literal(LiteralKind::LITERAL_STRING)?;
        Ok(self.ctx.symbols.store_literal(Keyword::STRING, text))
    }

    fn parse_literal_number(&mut self) -> Result<model::Literal, GrammarError> {
        match self.peek_literal_kind() {
            Some(LiteralKind::LITERAL_FLOAT) => {
                let text = self.expect_literal(LiteralKind::LITERAL_FLOAT)?;
                Ok(self.ctx.symbols.store_literal(Keyword::FLOAT, text))
            }
            Some(LiteralKind::LITERAL_INTEGER) => {
                let text = self.expect_literal(LiteralKind::LITERAL_INTEGER)?;
                Ok(self.ctx.symbols.store_literal(Keyword::INTEGER, text))
            }
            _ => Err(self.syntax_error_here()),
        }
    }

    fn parse_scenario_compound_statement(&mut self) -> Result<model::Scenario, GrammarError> {
        log::trace!("production: scenario_compound_statement");
        self.expect_keyword(Keyword::SCENARIO)?;
        self.expect_punct(Punctuation::CURVY_L)?;
        self.ctx.scope.open_scope();
        let scenario = self.parse_scenario_block_content();
        self.ctx.scope.close_scope();
        let scenario = scenario?;
        self.expect_punct(Punctuation::CURVY_R)?;
        Ok(scenario)
    }

    fn parse_scenario_block_content(&mut self) -> Result<model::Scenario, GrammarError> {
        log::trace!("production: scenario_block_content");
        let mut configuration = None;
        let mut attack = None;
        loop {
            match self.peek_keyword() {
                Some(Keyword::CONFIGURATION) if configuration.is_none() => {
                    configuration = Some(self.parse_configuration_compound_statement()?);
                }
                Some(Keyword::ATTACK) if attack.is_none() => {
                    attack = Some(self.parse_attack_compound_statement()?);
                }
                _ => break,
            }
        }
        Ok(model::Scenario { configuration, attack })
    }

    fn parse_configuration_compound_statement(&mut self) -> Result<model::Configuration, GrammarError> {
        log::trace!("production: configuration_compound_statement");
        self.expect_keyword(Keyword::CONFIGURATION)?;
        self.expect_punct(Punctuation::CURVY_L)?;
        self.ctx.scope.open_scope();
        let result = self.parse_configuration_block_content();
        self.ctx.scope.close_scope();
        result?;
        self.expect_punct(Punctuation::CURVY_R)?;
        let actions = self.ctx.staging.take_actions();
        Ok(model::Configuration { actions })
    }

    fn parse_configuration_block_content(&mut self) -> Result<(), GrammarError> {
        // configuration_action_set : configuration_action+
        self.parse_configuration_action()?;
        while self.peek_keyword().map(is_configuration_action_keyword).unwrap_or(false) {
            self.parse_configuration_action()?;
        }
        Ok(())
    }

    fn parse_configuration_action(&mut self) -> Result<(), GrammarError> {
        log::trace!("production: configuration_action");
        let action = match self.peek_keyword() {
            Some(Keyword::SET_UNIT_TIME) => {
                let reference = self.parse_action_set_unit(Keyword::SET_UNIT_TIME)?;
                model::Action::SetUnitTime(model::SetUnitTime { reference })
            }
            Some(Keyword::SET_UNIT_LENGTH) => {
                let reference = self.parse_action_set_unit(Keyword::SET_UNIT_LENGTH)?;
                model::Action::SetUnitLength(model::SetUnitLength { reference })
            }
            Some(Keyword::SET_UNIT_ANGLE) => {
                let reference = self.parse_action_set_unit(Keyword::SET_UNIT_ANGLE)?;
                model::Action::SetUnitAngle(model::SetUnitAngle { reference })
            }
            Some(Keyword::SET_TIME_START) => self.parse_action_set_time_start()?,
            _ => return Err(self.syntax_error_here()),
        };
        self.ctx.staging.append_action(action);
        Ok(())
    }

    fn parse_action_set_unit(&mut self, keyword: Keyword) -> Result<String, GrammarError> {
        log::trace!("production: action_set_unit ({})", keyword.token());
        self.expect_keyword(keyword)?;
        self.expect_punct(Punctuation::ROUND_L)?;
        let literal = self.parse_literal_string()?;
        self.expect_punct(Punctuation::ROUND_R)?;
        self.parse_semicolons()?;
        Ok(literal.identifier)
    }

    fn parse_action_set_time_start(&mut self) -> Result<model::Action, GrammarError> {
        log::trace!("production: action_set_time_start");
        let start_line = self.current_line();
        self.expect_keyword(Keyword::SET_TIME_START)?;
        self.expect_punct(Punctuation::ROUND_L)?;
        let literal = self.parse_literal_number()?;
        self.expect_punct(Punctuation::ROUND_R)?;
        self.parse_semicolons()?;
        let numeric: f64 = literal.value.parse().expect("the lexer only accepts numeric text here");
        if numeric < 0.0 {
            return Err(GrammarError::InvalidArgument { message: "time cannot be negative".to_string(), line: start_line });
        }
        Ok(model::Action::SetTimeStart(model::SetTimeStart { reference: literal.identifier }))
    }

    fn parse_attack_compound_statement(&mut self) -> Result<model::Attack, GrammarError> {
        log::trace!("production: attack_compound_statement");
        self.expect_keyword(Keyword::ATTACK)?;
        self.expect_punct(Punctuation::CURVY_L)?;
        self.ctx.scope.open_scope();
        let result = self.parse_attack_block_content();
        self.ctx.scope.close_scope();
        result?;
        self.expect_punct(Punctuation::CURVY_R)?;
        self.ctx.staging.clean(StagingKind::Identifier);
        Ok(model::Attack::default())
    }

    fn parse_attack_block_content(&mut self) -> Result<(), GrammarError> {
        loop {
            match self.peek_keyword() {
                Some(Keyword::ATTACK) => {
                    self.parse_attack_compound_statement()?;
                }
                Some(kw) if is_type_keyword(kw) => {
                    self.parse_declaration()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn parse_declaration(&mut self) -> Result<(), GrammarError> {
        log::trace!("production: declaration");
        let type_keyword = self.peek_keyword().expect("caller only enters on a type keyword");
        self.advance();
        loop {
            let (identifier, line) = self.expect_identifier()?;
            self.ctx.assert_not_shadowed(&identifier, line)?;
            self.ctx.staging.append_identifier(identifier.clone());
            let scope_id = self.ctx.scope.current_scope_id();
            self.ctx.symbols.store_variable(scope_id, identifier, type_keyword, None);
            if self.at_punct(Punctuation::COMMA) {
                self.advance();
                continue;
            }
            break;
        }
        self.expect_punct(Punctuation::SEMICOLON)?;
        Ok(())
    }
}

fn is_configuration_action_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::SET_UNIT_TIME | Keyword::SET_UNIT_LENGTH | Keyword::SET_UNIT_ANGLE | Keyword::SET_TIME_START
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse_source(source: &str) -> Result<Option<model::Scenario>, GrammarError> {
        let tokens = Lexer::lex(source).expect("source should lex cleanly in these tests");
        parse(&tokens)
    }

    #[test]
    fn empty_source_parses_to_none() {
        assert_eq!(parse_source("").unwrap(), None);
    }

    #[test]
    fn empty_scenario_has_both_fields_absent() {
        let scenario = parse_source("scenario { }").unwrap().unwrap();
        assert!(scenario.configuration.is_none());
        assert!(scenario.attack.is_none());
    }

    #[test]
    fn configuration_actions_are_recorded_in_lexical_order() {
        let scenario = parse_source(r#"scenario { configuration { setUnitTime("s"); setTimeStart(0); } }"#)
            .unwrap()
            .unwrap();
        let actions = scenario.configuration.unwrap().actions;
        assert_eq!(actions.len(), 2);
        assert!(matches!(&actions[0], model::Action::SetUnitTime(s) if s.reference == "_s"));
        assert!(matches!(&actions[1], model::Action::SetTimeStart(s) if s.reference == "_0"));
    }

    #[test]
    fn negative_time_start_is_rejected() {
        let err = parse_source("scenario { configuration { setTimeStart(-0.5); } }").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidArgument { .. }));
    }

    #[test]
    fn zero_time_start_is_accepted() {
        let scenario = parse_source("scenario { configuration { setTimeStart(0); } }").unwrap().unwrap();
        assert_eq!(scenario.configuration.unwrap().actions.len(), 1);
    }

    #[test]
    fn duplicate_identifier_on_one_declaration_line_is_rejected() {
        let err = parse_source("scenario { attack { integer x, x; } }").unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn shadowing_in_a_nested_attack_block_is_rejected() {
        let err = parse_source("scenario { attack { integer y; attack { integer y; } } }").unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn configuration_and_attack_can_appear_in_either_order() {
        assert!(parse_source(r#"scenario { attack { integer x; } configuration { setUnitTime("s"); } }"#)
            .unwrap()
            .is_some());
    }

    #[test]
    fn unexpected_token_is_a_syntax_error() {
        let err = parse_source("scenario [ }").unwrap_err();
        assert!(matches!(err, GrammarError::Syntax { .. }));
    }
}
