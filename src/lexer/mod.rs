//! Lexical analysis with hand written grammars.
//!
//! This module contains the pull-style tokenizers that read one token at
//! a time from a borrowed byte buffer. It handles:
//!
//! - Three grammars (C-like, Forth-like, Lisp-like), one bound per session
//! - Whitespace skipping and byte classification
//! - Decimal integer decoding of number tokens
//! - Token matching helpers for recursive descent callers

pub mod classify;
pub mod cursor;
pub mod grammars;
pub mod lexer;
pub mod tokens;
