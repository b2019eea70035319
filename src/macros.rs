//! Utility macros for the lexers.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the grammar tokenizers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Offset of the first byte of the token
/// * `$end` - Offset one past the last byte of the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, start, cursor.pos());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            start: $start,
            end: $end,
        }
    };
}
