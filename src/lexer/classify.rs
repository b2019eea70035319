//! Byte predicates shared by every grammar.

/// Space, tab, carriage return and line feed. Nothing else counts as
/// whitespace, not even form feed or vertical tab.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
pub fn is_ident(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[inline]
pub fn is_paren(byte: u8) -> bool {
    byte == b'(' || byte == b')'
}
