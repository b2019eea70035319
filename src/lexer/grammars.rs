//! The three hand written grammars. Each one reads exactly one token from
//! the cursor, stores it as the cursor's current token and returns it.
//!
//! At end of input every grammar produces a `None` token without moving the
//! cursor, so calling it again keeps producing `None`.

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    classify::{is_digit, is_ident, is_ident_start, is_paren, is_space},
    cursor::Cursor,
    tokens::{Token, TokenKind},
};

pub type TokenReader = fn(&mut Cursor) -> Result<Token, Error>;

fn emit(cursor: &mut Cursor, token: Token) -> Result<Token, Error> {
    trace!(kind = %token.kind, start = token.start, end = token.end, "token");
    cursor.set_token(token);
    Ok(token)
}

/// A one byte span is tagged by that byte.
fn word_kind(cursor: &Cursor, start: usize) -> TokenKind {
    if cursor.pos() - start == 1 {
        TokenKind::Char(cursor.source()[start])
    } else {
        TokenKind::Word
    }
}

/// C-like tokens: identifiers, decimal numbers and single printable
/// characters. Control bytes and bytes above 127 are rejected, leaving the
/// cursor where it was before the call.
pub fn read_c_token(cursor: &mut Cursor) -> Result<Token, Error> {
    let entry = cursor.pos();
    cursor.skip_whitespace();

    let start = cursor.pos();
    let peek = cursor.peek();

    if cursor.at_eof() {
        return emit(cursor, MK_TOKEN!(TokenKind::None, start, start));
    }

    if is_ident_start(peek) {
        cursor.advance();
        cursor.advance_while(is_ident);
        emit(cursor, MK_TOKEN!(TokenKind::Ident, start, cursor.pos()))
    } else if is_digit(peek) {
        cursor.advance();
        cursor.advance_while(is_digit);
        emit(cursor, MK_TOKEN!(TokenKind::Number, start, cursor.pos()))
    } else if peek > 32 && peek < 128 {
        cursor.advance();
        emit(cursor, MK_TOKEN!(TokenKind::Char(peek), start, cursor.pos()))
    } else {
        cursor.seek(entry);
        Err(Error::new(
            ErrorImpl::UnknownByte { byte: peek },
            cursor.position_at(start),
        ))
    }
}

/// Forth-like tokens: numbers, and any other run of non-whitespace bytes.
pub fn read_forth_token(cursor: &mut Cursor) -> Result<Token, Error> {
    cursor.skip_whitespace();

    let start = cursor.pos();

    if cursor.at_eof() {
        return emit(cursor, MK_TOKEN!(TokenKind::None, start, start));
    }

    if is_digit(cursor.peek()) {
        cursor.advance();
        cursor.advance_while(is_digit);
        return emit(cursor, MK_TOKEN!(TokenKind::Number, start, cursor.pos()));
    }

    cursor.advance();
    cursor.advance_while(|byte| !is_space(byte));

    let kind = word_kind(cursor, start);
    emit(cursor, MK_TOKEN!(kind, start, cursor.pos()))
}

/// Lisp-like tokens: parentheses, numbers, and words that stop in front of
/// whitespace, a digit or a parenthesis.
pub fn read_lisp_token(cursor: &mut Cursor) -> Result<Token, Error> {
    cursor.skip_whitespace();

    let start = cursor.pos();
    let peek = cursor.peek();

    if cursor.at_eof() {
        return emit(cursor, MK_TOKEN!(TokenKind::None, start, start));
    }

    cursor.advance();

    if is_paren(peek) {
        return emit(cursor, MK_TOKEN!(TokenKind::Char(peek), start, cursor.pos()));
    }

    if is_digit(peek) {
        cursor.advance_while(is_digit);
        return emit(cursor, MK_TOKEN!(TokenKind::Number, start, cursor.pos()));
    }

    cursor.advance_while(|byte| !is_space(byte) && !is_digit(byte) && !is_paren(byte));

    let kind = word_kind(cursor, start);
    emit(cursor, MK_TOKEN!(kind, start, cursor.pos()))
}
