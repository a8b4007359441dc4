use core::fmt;
use phf::phf_map;
use std::fmt::{Display, Formatter};

static KEYWORDS: phf::Map<&'static [u8], TokenKind> = phf_map! {
    b"and" => TokenKind::And,
    b"class" => TokenKind::Class,
    b"else" => TokenKind::Else,
    b"false" => TokenKind::False,
    b"fun" => TokenKind::Fun,
    b"for" => TokenKind::For,
    b"if" => TokenKind::If,
    b"nil" => TokenKind::Nil,
    b"or" => TokenKind::Or,
    b"print" => TokenKind::Print,
    b"return" => TokenKind::Return,
    b"super" => TokenKind::Super,
    b"this" => TokenKind::This,
    b"true" => TokenKind::True,
    b"var" => TokenKind::Var,
    b"while" => TokenKind::While,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Eof,
}

impl TokenKind {
    /// Looks up the keyword spelled by `word`, if any.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS.get(word.as_bytes()).copied()
    }

    pub fn is_unary_operator(self) -> bool {
        matches!(self, TokenKind::Minus | TokenKind::Bang)
    }

    pub fn is_binary_operator(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            BangEqual
                | EqualEqual
                | Greater
                | GreaterEqual
                | Less
                | LessEqual
                | Minus
                | Plus
                | Slash
                | Star
        )
    }

    pub fn is_logical_operator(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }
}

/// A decoded literal carried by a token or a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Value>,
    pub line: usize, // starting from 1
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Value>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// A token without a literal value, e.g. an operator or a punctuation mark.
    pub fn symbol(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self::new(kind, lexeme, None, line)
    }

    /// Classifies a bare word the way the scanner does: a reserved word gets its
    /// keyword kind, anything else is an identifier.
    pub fn word(lexeme: impl Into<String>, line: usize) -> Self {
        let lexeme = lexeme.into();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Self::new(kind, lexeme, None, line)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at line {}", self.lexeme, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("and", TokenKind::And)]
    #[case("class", TokenKind::Class)]
    #[case("super", TokenKind::Super)]
    #[case("this", TokenKind::This)]
    #[case("return", TokenKind::Return)]
    #[case("x", TokenKind::Identifier)]
    #[case("a1b2c3_d4", TokenKind::Identifier)]
    #[case("classy", TokenKind::Identifier)]
    fn word_classifies_reserved_words(#[case] lexeme: &str, #[case] kind: TokenKind) {
        let token = Token::word(lexeme, 3);
        assert_eq!(token.kind, kind);
        assert_eq!(token.lexeme, lexeme);
        assert_eq!(token.literal, None);
        assert_eq!(token.line, 3);
    }

    #[rstest]
    #[case(Value::Number(123.), "123")]
    #[case(Value::Number(45.67), "45.67")]
    #[case(Value::Number(-0.5), "-0.5")]
    #[case(Value::String("foo bar".to_string()), "foo bar")]
    #[case(Value::Bool(true), "true")]
    #[case(Value::Bool(false), "false")]
    fn value_displays_canonical_text(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn operator_classes_do_not_overlap_with_logical_ones() {
        assert!(TokenKind::Minus.is_unary_operator());
        assert!(TokenKind::Minus.is_binary_operator());
        assert!(!TokenKind::And.is_binary_operator());
        assert!(TokenKind::Or.is_logical_operator());
        assert!(!TokenKind::Plus.is_logical_operator());
        assert!(!TokenKind::Star.is_unary_operator());
    }

    #[test]
    fn token_display_points_at_lexeme_and_line() {
        let token = Token::symbol(TokenKind::Star, "*", 7);
        assert_eq!(token.to_string(), "'*' at line 7");
    }
}
