#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::Error;

pub mod dfa;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use dfa::{
    compiler::compile_patterns,
    recipe::Recipe,
    scanner::{scan_with_recipe, Lexeme, Scanner},
};
pub use lexer::{
    lexer::{decode_uint, select_grammar, tokenize, Grammar, Lexer},
    tokens::{Token, TokenKind},
};

/// Byte offset into a named source (an input buffer or a pattern rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the 1-based line number, the text of that line and the column of
/// `position` within it, or `None` if `position` is past the end of `source`.
pub fn get_line_at_position(source: &[u8], position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive(|&b| b == b'\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_text = String::from_utf8_lossy(line).into_owned();
            return Some((index + 1, line_text, position - start));
        }

        start = end;
    }

    None
}

/// Renders an error the way the command line tool prints it:
///
/// ```text
/// Error: UnknownByte (Unknown character: 1)
/// -> input.txt
///   |
/// 1 | let a = ?;
///   | --------^
/// ```
///
/// The source excerpt is omitted when `source` is `None` or the position
/// does not fall inside it.
pub fn format_error(error: &Error, source: Option<&[u8]>) -> String {
    let mut out = String::new();
    let position = error.get_position();

    out.push_str(&format!(
        "Error: {} ({})\n",
        error.get_error_name(),
        error.get_tip()
    ));
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) =
        source.and_then(|source| get_line_at_position(source, position.0))
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.bytes().take_while(|&b| b == b' ').count();

    (String::from(&string[start..]), start)
}
