use std::{borrow::Cow, collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    cursor::Cursor,
    grammars::{read_c_token, read_forth_token, read_lisp_token, TokenReader},
    tokens::{Token, TokenKind},
};

lazy_static! {
    pub static ref GRAMMAR_LOOKUP: HashMap<&'static str, Grammar> = {
        let mut map = HashMap::new();
        map.insert("c", Grammar::CLike);
        map.insert("forth", Grammar::Forth);
        map.insert("lisp", Grammar::Lisp);
        map
    };
}

/// Lexical grammar a [`Lexer`] is bound to for its whole session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Grammar {
    #[default]
    CLike,
    Forth,
    Lisp,
}

impl Grammar {
    pub fn name(self) -> &'static str {
        match self {
            Grammar::CLike => "c",
            Grammar::Forth => "forth",
            Grammar::Lisp => "lisp",
        }
    }

    pub fn reader(self) -> TokenReader {
        match self {
            Grammar::CLike => read_c_token,
            Grammar::Forth => read_forth_token,
            Grammar::Lisp => read_lisp_token,
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GRAMMAR_LOOKUP
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("unknown grammar `{}`, expected one of: c, forth, lisp", s))
    }
}

/// Returns the token reader implementing `grammar`.
pub fn select_grammar(grammar: Grammar) -> TokenReader {
    grammar.reader()
}

/// Converts a run of ASCII digits to its value. Digits are not validated,
/// and values that do not fit in a `u64` wrap around.
pub fn decode_uint(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |value, &digit| {
        value
            .wrapping_mul(10)
            .wrapping_add(digit.wrapping_sub(b'0') as u64)
    })
}

/// One tokenizing session: a cursor over a borrowed buffer and the reader
/// of the grammar chosen when the session was created.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    grammar: Grammar,
    reader: TokenReader,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8], grammar: Grammar, file: Option<String>) -> Lexer<'a> {
        let cursor = Cursor::new(source, file);
        debug!(grammar = %grammar, file = %cursor.file(), len = source.len(), "binding grammar");

        Lexer {
            cursor,
            grammar,
            reader: select_grammar(grammar),
        }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Reads the next token and makes it current. Past end of input this
    /// keeps returning a `None` token at the same offset.
    pub fn read_token(&mut self) -> Result<Token, Error> {
        (self.reader)(&mut self.cursor)
    }

    pub fn token(&self) -> Token {
        self.cursor.token()
    }

    pub fn token_text(&self) -> &'a [u8] {
        self.token().text(self.cursor.source())
    }

    /// Byte-exact copy of the current token's text.
    pub fn token_text_owned(&self) -> Vec<u8> {
        self.token_text().to_vec()
    }

    /// The current token's text for display. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD.
    pub fn token_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.token_text())
    }

    /// Value of the current token, which must be a digit run.
    pub fn parse_uint(&self) -> u64 {
        decode_uint(self.token_text())
    }

    pub fn matches_str(&self, expected: &str) -> bool {
        self.token_text() == expected.as_bytes()
    }

    pub fn matches_kind(&self, kind: TokenKind) -> bool {
        self.token().kind == kind
    }

    /// Consumes the current token if its text is `expected`.
    pub fn eat_str(&mut self, expected: &str) -> Result<Token, Error> {
        if self.matches_str(expected) {
            self.read_token()
        } else {
            Err(self.unexpected(expected.to_string()))
        }
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.matches_kind(kind) {
            self.read_token()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    pub fn try_eat_str(&mut self, expected: &str) -> Result<bool, Error> {
        if self.matches_str(expected) {
            self.read_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn try_eat(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.matches_kind(kind) {
            self.read_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn unexpected(&self, expected: String) -> Error {
        let token = self.token();
        let found = if token.is_none() {
            String::from("end of input")
        } else {
            self.token_str().into_owned()
        };

        Error::new(
            ErrorImpl::UnexpectedToken { expected, found },
            self.cursor.position_at(token.start),
        )
    }
}

/// Tokenizes the whole of `source`. The last token is always `None`.
pub fn tokenize(source: &[u8], grammar: Grammar, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, grammar, file);
    let mut tokens = vec![];

    loop {
        let token = lex.read_token()?;
        tokens.push(token);

        if token.is_none() {
            break;
        }
    }

    Ok(tokens)
}
