use std::iter::FusedIterator;

use tracing::trace;

use crate::lexer::cursor::Cursor;

use super::recipe::{Recipe, StateId, START_STATE};

/// A span of the scanned buffer and the state the scan stopped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub start: usize,
    pub end: usize,
    pub state: StateId,
}

impl Lexeme {
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.start..self.end]
    }

    /// Whether the scan stopped in a state some rule ends in.
    pub fn is_accepted(&self, recipe: &Recipe) -> bool {
        self.state != START_STATE && recipe.is_final(self.state)
    }
}

/// Lazily splits a buffer into lexemes using a compiled [`Recipe`].
///
/// A lexeme ends in front of the first byte whose transition leads back to
/// the start state. A byte with no transition out of the start state at all
/// becomes a one byte lexeme tagged with the start state. End of the buffer
/// and an interior NUL byte both end the scan. Whitespace between lexemes is
/// skipped by the same [`Cursor`] the hand written grammars use.
#[derive(Debug, Clone)]
pub struct Scanner<'r, 's> {
    recipe: &'r Recipe,
    cursor: Cursor<'s>,
}

impl<'r, 's> Scanner<'r, 's> {
    pub fn new(recipe: &'r Recipe, source: &'s [u8]) -> Self {
        Scanner {
            recipe,
            cursor: Cursor::new(source, None),
        }
    }

    /// Offset the next lexeme will be searched from.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    pub fn resume_at(&mut self, offset: usize) {
        self.cursor.seek(offset);
    }
}

impl<'r, 's> Iterator for Scanner<'r, 's> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.cursor.skip_whitespace();

        if self.cursor.at_eof() {
            return None;
        }

        let start = self.cursor.pos();
        let mut state = START_STATE;

        while !self.cursor.at_eof() {
            let next = self.recipe.next(self.cursor.peek(), state);
            if next == START_STATE {
                break;
            }

            self.cursor.advance();
            state = next;
        }

        if self.cursor.pos() == start {
            self.cursor.advance();
        }

        let lexeme = Lexeme {
            start,
            end: self.cursor.pos(),
            state,
        };
        trace!(start = lexeme.start, end = lexeme.end, state = lexeme.state, "lexeme");

        Some(lexeme)
    }
}

impl FusedIterator for Scanner<'_, '_> {}

/// Scans `source` from its first byte with `recipe`.
pub fn scan_with_recipe<'r, 's>(recipe: &'r Recipe, source: &'s [u8]) -> Scanner<'r, 's> {
    Scanner::new(recipe, source)
}

impl Recipe {
    pub fn scan<'r, 's>(&'r self, source: &'s [u8]) -> Scanner<'r, 's> {
        Scanner::new(self, source)
    }
}
