use std::rc::Rc;

use crate::Position;

use super::{classify::is_space, tokens::Token};

/// Scan position plus the last token recognised, over a borrowed buffer.
///
/// The end of the buffer and an interior NUL byte both read as end of
/// input: [`Cursor::peek`] returns `0` for either.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
    token: Token,
    file: Rc<String>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8], file: Option<String>) -> Cursor<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Cursor {
            source,
            pos: 0,
            token: Token::default(),
            file: file_name,
        }
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn set_token(&mut self, token: Token) {
        self.token = token;
    }

    pub fn peek(&self) -> u8 {
        self.source.get(self.pos).copied().unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.peek() == 0
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Moves to `offset`, clamped to the end of the buffer.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset.min(self.source.len());
    }

    /// Advances while `predicate` holds for the current byte, never past
    /// end of input.
    pub fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while !self.at_eof() && predicate(self.peek()) {
            self.pos += 1;
        }
    }

    /// Skips one leading space, then any run of whitespace.
    pub fn skip_whitespace(&mut self) {
        if self.peek() == b' ' {
            self.pos += 1;
        }

        self.advance_while(is_space);
    }

    pub fn position_at(&self, offset: usize) -> Position {
        Position(offset, Rc::clone(&self.file))
    }
}
