//! Table driven lexing from bracket-expression rules.
//!
//! This module compiles rules such as `[A-Za-z_][A-Za-z0-9_]*` into a
//! fixed size deterministic automaton and scans buffers with it:
//!
//! - `recipe` holds the 128 byte by 32 state transition table
//! - `compiler` turns an ordered list of rules into a recipe
//! - `scanner` walks a buffer with a recipe, one lexeme at a time
//!
//! The start state is always final and every transition the rules do not
//! define leads back to it, so a byte without a transition ends the current
//! lexeme instead of raising an error.

pub mod compiler;
pub mod recipe;
pub mod scanner;
