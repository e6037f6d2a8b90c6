//! The lexeme registry (C1).
//!
//! Declares the three disjoint token families ADeLe source text is made of —
//! keywords, punctuation and literal kinds — and the lookup tables the lexer
//! needs to recognize them. Grounded in `py-adele`'s `parser.lexeme.Lexeme`
//! base class and its `Keyword`/`Punctuation`/`Literal` subclasses.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Common surface every lexeme family exposes, mirroring the original's
/// `Lexeme.token`/`Lexeme.lexeme`/`Lexeme.tokens`/`Lexeme.lexemes`/`Lexeme.reverse_map`.
pub trait LexemeSet: Sized + Copy + 'static {
    /// All members, in declaration order.
    const ALL: &'static [Self];

    /// The uppercase grammar-facing tag, e.g. `"SET_TIME_START"`.
    fn token(&self) -> &'static str;

    /// The literal spelling or pattern, e.g. `"setTimeStart"`.
    fn lexeme(&self) -> &'static str;

    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::token).collect()
    }

    fn lexemes() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::lexeme).collect()
    }

    /// Maps a lexeme spelling back onto its token name.
    fn reverse_map() -> &'static HashMap<&'static str, &'static str>;

    /// Resolves a lexeme spelling back onto the member itself, used by the
    /// lexer to promote an identifier-shaped scan into a reserved word.
    fn by_lexeme(lexeme: &str) -> Option<Self>;
}

macro_rules! lexeme_set {
    ($name:ident { $( $variant:ident => $lexeme:literal ),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $( $variant ),+
        }

        impl LexemeSet for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn token(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }

            fn lexeme(&self) -> &'static str {
                match self {
                    $( Self::$variant => $lexeme ),+
                }
            }

            fn reverse_map() -> &'static HashMap<&'static str, &'static str> {
                static MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
                    let mut map = HashMap::new();
                    $( map.insert($lexeme, stringify!($variant)); )+
                    map
                });
                &MAP
            }

            fn by_lexeme(lexeme: &str) -> Option<Self> {
                static MAP: Lazy<HashMap<&'static str, $name>> = Lazy::new(|| {
                    let mut map = HashMap::new();
                    $( map.insert($lexeme, $name::$variant); )+
                    map
                });
                MAP.get(lexeme).copied()
            }
        }
    };
}

lexeme_set! {
    Keyword {
        // Unscoped primitive types
        BOOLEAN => "boolean",
        CHAR => "char",
        INTEGER => "integer",
        FLOAT => "float",
        STRING => "string",
        // Scoped primitive types
        UINT8 => "uint8",
        UINT16 => "uint16",
        UINT32 => "uint32",
        UINT64 => "uint64",
        SINT8 => "sint8",
        SINT16 => "sint16",
        SINT32 => "sint32",
        SINT64 => "sint64",
        FLOAT32 => "float32",
        FLOAT64 => "float64",
        // Generic message
        MESSAGE => "message",
        // Boolean values
        FALSE => "false",
        TRUE => "true",
        // Configuration actions
        SET_UNIT_TIME => "setUnitTime",
        SET_UNIT_LENGTH => "setUnitLength",
        SET_UNIT_ANGLE => "setUnitAngle",
        SET_TIME_START => "setTimeStart",
        // Attack actions (reserved, no production exercises them yet)
        ELEMENT_MISPLACE => "elementMisplace",
        ELEMENT_ROTATE => "elementRotate",
        ELEMENT_DECEIVE => "elementDeceive",
        ELEMENT_DISABLE => "elementDisable",
        ELEMENT_ENABLE => "elementEnable",
        ELEMENT_DESTROY => "elementDestroy",
        MESSAGE_WRITE => "messageWrite",
        MESSAGE_READ => "messageRead",
        MESSAGE_FORWARD => "messageForward",
        MESSAGE_INJECT => "messageInject",
        MESSAGE_CREATE => "messageCreate",
        MESSAGE_CLONE => "messageClone",
        MESSAGE_DROP => "messageDrop",
        // Block / statement keywords
        SCENARIO => "scenario",
        CONFIGURATION => "configuration",
        ATTACK => "attack",
        AT => "at",
        FOREACH => "foreach",
        FROM => "from",
        FOR => "for",
        IF => "if",
        ELSE => "else",
        // Containers
        LIST => "list",
        RANGE => "range",
        // Accessor
        IN => "in",
        // Well-known constants
        CAPTURED => "CAPTURED",
        SELF_ => "SELF",
        START => "START",
        END => "END",
        TX => "TX",
        RX => "RX",
        // Time units
        HOUR => "h",
        MINUTE => "min",
        SECOND => "s",
        SECOND_MILLI => "ms",
        SECOND_MICRO => "us",
    }
}

lexeme_set! {
    Punctuation {
        ASSIGN => "=",
        ASSIGN_ADD => "+=",
        ASSIGN_SUB => "-=",
        ASSIGN_MUL => "*=",
        ASSIGN_DIV => "/=",
        ASSIGN_MOD => "%=",
        NOT_EQUAL_TO => "!=",
        EQUAL_TO => "==",
        GR_EQ_THAN => ">=",
        LS_EQ_THAN => "<=",
        GR_THAN => ">",
        LS_THAN => "<",
        ADD => "+",
        SUB => "-",
        MUL => "*",
        DIV => "/",
        MOD => "%",
        EXP => "^",
        NEG => "!",
        LOGIC_AND => "&&",
        LOGIC_OR => "||",
        ROUND_L => "(",
        ROUND_R => ")",
        BRACK_L => "[",
        BRACK_R => "]",
        CURVY_L => "{",
        CURVY_R => "}",
        SEMICOLON => ";",
        COMMA => ",",
        COLON => ":",
    }
}

lexeme_set! {
    LiteralKind {
        LITERAL_IDENTIFIER => "LITERAL_IDENTIFIER",
        LITERAL_INTEGER => "LITERAL_INTEGER",
        LITERAL_FLOAT => "LITERAL_FLOAT",
        LITERAL_STRING => "LITERAL_STRING",
        LITERAL_CHAR => "LITERAL_CHAR",
    }
}

/// Sorted so the lexer can try the longest punctuation lexemes first
/// (rule 6 of the lexer: longest match against punctuation).
pub fn punctuation_by_length_desc() -> Vec<Punctuation> {
    let mut all: Vec<Punctuation> = Punctuation::ALL.to_vec();
    all.sort_by_key(|p| std::cmp::Reverse(p.lexeme().len()));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_pairwise_disjoint() {
        let kw: HashSet<_> = Keyword::tokens().into_iter().collect();
        let punct: HashSet<_> = Punctuation::tokens().into_iter().collect();
        let lit: HashSet<_> = LiteralKind::tokens().into_iter().collect();

        assert!(kw.intersection(&punct).next().is_none());
        assert!(kw.intersection(&lit).next().is_none());
        assert!(punct.intersection(&lit).next().is_none());
    }

    #[test]
    fn lexemes_are_pairwise_disjoint() {
        let kw: HashSet<_> = Keyword::lexemes().into_iter().collect();
        let punct: HashSet<_> = Punctuation::lexemes().into_iter().collect();
        let lit: HashSet<_> = LiteralKind::lexemes().into_iter().collect();

        assert!(kw.intersection(&punct).next().is_none());
        assert!(kw.intersection(&lit).next().is_none());
        assert!(punct.intersection(&lit).next().is_none());
    }

    #[test]
    fn reverse_map_resolves_every_keyword() {
        let map = Keyword::reverse_map();
        assert_eq!(map.get("setTimeStart"), Some(&"SET_TIME_START"));
        assert_eq!(map.get("scenario"), Some(&"SCENARIO"));
        assert_eq!(map.get("not_a_keyword"), None);
    }

    #[test]
    fn punctuation_longest_first() {
        let sorted = punctuation_by_length_desc();
        let first_len = sorted[0].lexeme().len();
        assert!(sorted.windows(2).all(|w| w[0].lexeme().len() >= w[1].lexeme().len()));
        assert_eq!(first_len, 2);
    }
}
