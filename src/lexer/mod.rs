//! The lexer (C2): source text to a token stream.
//!
//! Grounded in the teacher's orphaned `src/lexer.rs` — a hand-rolled scanner
//! over `Peekable<Chars>` tracking a line counter — and in
//! `examples/original_source/src/parser/lexer.py`'s `ply.lex` token
//! functions, applied in the same priority order `spec.md` §4.2 lists: char,
//! float, integer, string, identifier/keyword promotion, punctuation
//! (longest match), whitespace, newline, comment, illegal character.

pub mod error;

use std::iter::Peekable;
use std::str::Chars;

use crate::lexeme::{punctuation_by_length_desc, Keyword, LexemeSet, LiteralKind, Punctuation};

pub use error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Punctuation(Punctuation),
    Literal(LiteralKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

pub struct Lexer<'a> {
    iter: Peekable<Chars<'a>>,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { iter: source.chars().peekable(), line: 1, tokens: Vec::new() }
    }

    pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(source);
        lexer.run()?;
        Ok(lexer.tokens)
    }

    fn peek_second(&self) -> Option<char> {
        let mut clone = self.iter.clone();
        clone.next();
        clone.next()
    }

    fn run(&mut self) -> Result<(), LexError> {
        while let Some(&ch) = self.iter.peek() {
            match ch {
                ' ' | '\t' => {
                    self.iter.next();
                }
                '\n' => {
                    self.iter.next();
                    self.line += 1;
                }
                '#' => self.skip_comment(),
                '\'' => self.lex_char()?,
                '"' => self.lex_string()?,
                '-' if matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) => {
                    self.lex_numeric()?
                }
                c if c.is_ascii_digit() => self.lex_numeric()?,
                c if c.is_ascii_alphabetic() => self.lex_alphanumeric(),
                _ => {
                    if let Some(token) = self.try_lex_punctuation() {
                        self.tokens.push(token);
                    } else {
                        let line = self.line;
                        let bad = self.iter.next().expect("peek() just confirmed a char");
                        return Err(LexError::IllegalCharacter { ch: bad, line });
                    }
                }
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.iter.peek() {
            if c == '\n' {
                break;
            }
            self.iter.next();
        }
    }

    fn lex_char(&mut self) -> Result<(), LexError> {
        let line = self.line;
        self.iter.next(); // opening quote
        let ch = self.iter.next().ok_or(LexError::IllegalCharacter { ch: '\'', line })?;
        match self.iter.next() {
            Some('\'') => {
                self.tokens.push(Token { kind: TokenKind::Literal(LiteralKind::LITERAL_CHAR), text: ch.to_string(), line });
                Ok(())
            }
            _ => Err(LexError::IllegalCharacter { ch, line }),
        }
    }

    fn lex_string(&mut self) -> Result<(), LexError> {
        let line = self.line;
        self.iter.next(); // opening quote
        let mut raw = String::new();
        loop {
            match self.iter.next() {
                Some('"') => break,
                Some('\\') => {
                    raw.push('\\');
                    if let Some(escaped) = self.iter.next() {
                        raw.push(escaped);
                    }
                }
                Some(c) => raw.push(c),
                None => return Err(LexError::IllegalCharacter { ch: '"', line }),
            }
        }
        let text = unescape::unescape(&raw).unwrap_or(raw);
        self.tokens.push(Token { kind: TokenKind::Literal(LiteralKind::LITERAL_STRING), text, line });
        Ok(())
    }

    fn lex_numeric(&mut self) -> Result<(), LexError> {
        let line = self.line;
        let mut text = String::new();
        if self.iter.peek() == Some(&'-') {
            text.push(self.iter.next().unwrap());
        }
        while let Some(&c) = self.iter.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.iter.next();
            } else {
                break;
            }
        }
        if self.iter.peek() == Some(&'.') {
            if let Some(after_dot) = self.peek_second() {
                if after_dot.is_ascii_digit() {
                    text.push(self.iter.next().unwrap()); // '.'
                    while let Some(&c) = self.iter.peek() {
                        if c.is_ascii_digit() {
                            text.push(c);
                            self.iter.next();
                        } else {
                            break;
                        }
                    }
                    if text.parse::<f64>().is_err() {
                        return Err(LexError::MalformedNumber { text, line });
                    }
                    self.tokens.push(Token { kind: TokenKind::Literal(LiteralKind::LITERAL_FLOAT), text, line });
                    return Ok(());
                }
            }
        }
        if text.parse::<i64>().is_err() {
            return Err(LexError::MalformedNumber { text, line });
        }
        self.tokens.push(Token { kind: TokenKind::Literal(LiteralKind::LITERAL_INTEGER), text, line });
        Ok(())
    }

    fn lex_alphanumeric(&mut self) {
        let line = self.line;
        let mut text = String::new();
        while let Some(&c) = self.iter.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.iter.next();
            } else {
                break;
            }
        }
        let kind = match Keyword::by_lexeme(&text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Literal(LiteralKind::LITERAL_IDENTIFIER),
        };
        self.tokens.push(Token { kind, text, line });
    }

    fn try_lex_punctuation(&mut self) -> Option<Token> {
        let line = self.line;
        for punctuation in punctuation_by_length_desc() {
            let lexeme = punctuation.lexeme();
            let mut probe = self.iter.clone();
            if lexeme.chars().all(|expected| probe.next() == Some(expected)) {
                for _ in lexeme.chars() {
                    self.iter.next();
                }
                return Some(Token { kind: TokenKind::Punctuation(punctuation), text: lexeme.to_string(), line });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_keywords_and_braces() {
        let tokens = Lexer::lex("scenario { }").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword(Keyword::SCENARIO),
                TokenKind::Punctuation(Punctuation::CURVY_L),
                TokenKind::Punctuation(Punctuation::CURVY_R),
            ]
        );
    }

    #[test]
    fn promotes_identifier_to_keyword_case_sensitively() {
        let tokens = Lexer::lex("scenario Scenario").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::SCENARIO));
        assert_eq!(tokens[1].kind, TokenKind::Literal(LiteralKind::LITERAL_IDENTIFIER));
    }

    #[test]
    fn lexes_string_literal_and_strips_quotes() {
        let tokens = Lexer::lex("\"s\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralKind::LITERAL_STRING));
        assert_eq!(tokens[0].text, "s");
    }

    #[test]
    fn lexes_negative_float() {
        let tokens = Lexer::lex("-0.5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralKind::LITERAL_FLOAT));
        assert_eq!(tokens[0].text, "-0.5");
    }

    #[test]
    fn lexes_integer_zero() {
        let tokens = Lexer::lex("0").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralKind::LITERAL_INTEGER));
    }

    #[test]
    fn longest_match_prefers_two_character_punctuation() {
        let tokens = Lexer::lex("!=").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Punctuation(Punctuation::NOT_EQUAL_TO));
    }

    #[test]
    fn newline_increments_line_counter() {
        let tokens = Lexer::lex("scenario\n{").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn comment_is_ignored_to_end_of_line() {
        let tokens = Lexer::lex("scenario # a comment\n{").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn illegal_character_is_reported_with_its_line() {
        let err = Lexer::lex("scenario\n@").unwrap_err();
        assert_eq!(err, LexError::IllegalCharacter { ch: '@', line: 2 });
    }

    #[test]
    fn empty_source_lexes_to_no_tokens() {
        assert!(Lexer::lex("").unwrap().is_empty());
    }
}
