//! Error types and error handling for the lexers.
//!
//! This module defines the error types shared by the grammar tokenizers
//! and the pattern compiler. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing and pattern compilation
//! - Helpful error messages and suggestions
//!
//! Integer decoding never fails: digit runs that do not fit in a `u64`
//! wrap around, see [`crate::lexer::lexer::decode_uint`].

pub mod errors;

#[cfg(test)]
mod tests;
