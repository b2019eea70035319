use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::recipe::{Recipe, StateId, ALPHABET_SIZE, MAX_STATES, START_STATE};

lazy_static! {
    /// One bracket group at the start of the remaining rule text, with its
    /// optional quantifier.
    static ref BRACKET_GROUP: Regex = Regex::new(r"^\[([^\]]*)\]([+*]?)").unwrap();
}

/// Set of bytes accepted by one bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Charset(u128);

impl Charset {
    fn insert(&mut self, byte: u8) {
        self.0 |= 1u128 << byte;
    }

    fn bytes(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter(move |&byte| self.0 & (1u128 << byte) != 0)
    }
}

fn malformed(rule: usize, offset: usize, reason: &str) -> Error {
    Error::new(
        ErrorImpl::MalformedPattern {
            rule,
            reason: reason.to_string(),
        },
        Position(offset, Rc::new(format!("rule {}", rule))),
    )
}

/// Parses the inside of a bracket group: literal bytes and inclusive
/// `lo-hi` ranges. A `-` at either end is a literal.
fn parse_charset(rule: usize, offset: usize, text: &str) -> Result<Charset, Error> {
    if text.is_empty() {
        return Err(malformed(rule, offset, "empty charset"));
    }

    let bytes = text.as_bytes();
    let mut charset = Charset::default();
    let mut i = 0;

    while i < bytes.len() {
        let lo = bytes[i];
        let (hi, width) = if i + 2 < bytes.len() && bytes[i + 1] == b'-' {
            (bytes[i + 2], 3)
        } else {
            (lo, 1)
        };

        if hi as usize >= ALPHABET_SIZE || lo as usize >= ALPHABET_SIZE {
            return Err(malformed(rule, offset + i, "byte outside the 7-bit alphabet"));
        }
        if lo > hi {
            return Err(malformed(rule, offset + i, "range bounds are reversed"));
        }

        for byte in lo..=hi {
            charset.insert(byte);
        }

        i += width;
    }

    Ok(charset)
}

fn alloc_state(recipe: &mut Recipe, rule: usize) -> Result<StateId, Error> {
    recipe.alloc_state().ok_or_else(|| {
        Error::new(
            ErrorImpl::TooManyStates {
                rule,
                limit: MAX_STATES,
            },
            Position(0, Rc::new(format!("rule {}", rule))),
        )
    })
}

/// Wires one rule into `recipe` starting from the start state and returns
/// the last state it reaches.
fn compile_rule(recipe: &mut Recipe, index: usize, rule: &str) -> Result<StateId, Error> {
    if rule.is_empty() {
        return Err(malformed(index, 0, "rule has no bracket groups"));
    }

    let mut state = START_STATE;
    let mut offset = 0;

    while offset < rule.len() {
        let rest = &rule[offset..];

        if !rest.starts_with('[') {
            return Err(malformed(index, offset, "expected `[`"));
        }

        let Some(group) = BRACKET_GROUP.captures(rest) else {
            return Err(malformed(index, offset, "unterminated bracket group"));
        };

        let charset = parse_charset(index, offset + 1, &group[1])?;

        match &group[2] {
            "*" => {
                for byte in charset.bytes() {
                    recipe.set(byte, state, state);
                }
            }
            "+" => {
                let next = alloc_state(recipe, index)?;
                for byte in charset.bytes() {
                    recipe.set(byte, state, next);
                }

                // every edge into `next` becomes a self loop on it
                for byte in 0..ALPHABET_SIZE as u8 {
                    if recipe.next(byte, state) == next {
                        recipe.set(byte, next, next);
                    }
                }

                state = next;
            }
            _ => {
                let next = alloc_state(recipe, index)?;
                for byte in charset.bytes() {
                    recipe.set(byte, state, next);
                }

                state = next;
            }
        }

        offset += group[0].len();
    }

    Ok(state)
}

/// Compiles `rules` into a single recipe sharing one start state.
///
/// Each rule is a sequence of bracket groups such as `[A-Za-z_]`, each
/// optionally followed by `+` (one or more) or `*` (zero or more). The last
/// state each rule reaches is marked final. Rules are wired in order, so a
/// later rule overwrites an earlier one's transition on the same byte and
/// state.
pub fn compile_patterns<S: AsRef<str>>(rules: &[S]) -> Result<Recipe, Error> {
    let mut recipe = Recipe::default();

    for (index, rule) in rules.iter().enumerate() {
        let rule = rule.as_ref();
        let last = compile_rule(&mut recipe, index, rule)?;
        recipe.mark_final(last);

        debug!(
            rule = index,
            pattern = rule,
            final_state = last,
            states = recipe.state_count(),
            "compiled rule"
        );
    }

    Ok(recipe)
}
