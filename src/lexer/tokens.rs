use std::fmt::Display;

/// Code of the first multi-byte token kind; everything below is a raw byte.
pub const IDENT_CODE: i32 = 128;
pub const NUMBER_CODE: i32 = 129;
/// Used by the forth and lisp grammars for any multi-byte token that is not a number.
pub const WORD_CODE: i32 = 130;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TokenKind {
    /// End of input.
    #[default]
    None,
    /// Single character tokens are tagged with the byte itself.
    Char(u8),
    Ident,
    Number,
    Word,
}

impl TokenKind {
    /// Numeric code of the kind: 0 for `None`, the byte for `Char`, and
    /// 128.. for the multi-byte kinds. Bytes above 127 are read as signed
    /// so they map to negative codes and never collide with `Ident`.
    pub fn code(self) -> i32 {
        match self {
            TokenKind::None => 0,
            TokenKind::Char(byte) => byte as i8 as i32,
            TokenKind::Ident => IDENT_CODE,
            TokenKind::Number => NUMBER_CODE,
            TokenKind::Word => WORD_CODE,
        }
    }

    pub fn from_code(code: i32) -> Option<TokenKind> {
        match code {
            0 => Some(TokenKind::None),
            -128..=-1 | 1..=127 => Some(TokenKind::Char(code as i8 as u8)),
            IDENT_CODE => Some(TokenKind::Ident),
            NUMBER_CODE => Some(TokenKind::Number),
            WORD_CODE => Some(TokenKind::Word),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::None => write!(f, "None"),
            TokenKind::Char(byte) if byte.is_ascii_graphic() => write!(f, "'{}'", *byte as char),
            TokenKind::Char(byte) => write!(f, "{:#04x}", byte),
            TokenKind::Ident => write!(f, "Ident"),
            TokenKind::Number => write!(f, "Number"),
            TokenKind::Word => write!(f, "Word"),
        }
    }
}

/// A token recognised in a caller owned buffer. `start..end` are byte
/// offsets into that buffer; the token never owns its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, span: {}..{} }}", self.kind, self.start, self.end)
    }
}

impl Token {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_none(&self) -> bool {
        self.kind == TokenKind::None
    }

    /// The bytes of this token in `source`, the buffer it was read from.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.start..self.end]
    }
}
