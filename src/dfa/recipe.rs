use std::fmt::Display;

/// Bytes at or above this value have no transitions.
pub const ALPHABET_SIZE: usize = 128;
pub const MAX_STATES: usize = 32;
pub const START_STATE: StateId = 0;

pub type StateId = u8;

/// A compiled transition table and its final states.
///
/// The table is indexed `[byte][state]`. Entries never written by the
/// compiler hold [`START_STATE`], which is always final, so a byte with no
/// transition ends the current token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    table: [[StateId; MAX_STATES]; ALPHABET_SIZE],
    finals: u32,
    state_count: usize,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            table: [[START_STATE; MAX_STATES]; ALPHABET_SIZE],
            finals: 1u32 << START_STATE,
            state_count: 1,
        }
    }
}

impl Recipe {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn is_final(&self, state: StateId) -> bool {
        (state as usize) < MAX_STATES && self.finals & (1u32 << state) != 0
    }

    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.state_count as StateId).filter(|&state| self.is_final(state))
    }

    pub fn next(&self, byte: u8, state: StateId) -> StateId {
        self.table
            .get(byte as usize)
            .and_then(|row| row.get(state as usize))
            .copied()
            .unwrap_or(START_STATE)
    }

    pub(crate) fn alloc_state(&mut self) -> Option<StateId> {
        if self.state_count == MAX_STATES {
            return None;
        }

        self.state_count += 1;
        Some((self.state_count - 1) as StateId)
    }

    pub(crate) fn set(&mut self, byte: u8, from: StateId, to: StateId) {
        self.table[byte as usize][from as usize] = to;
    }

    pub(crate) fn mark_final(&mut self, state: StateId) {
        self.finals |= 1u32 << state;
    }
}

impl Display for Recipe {
    /// One line per state listing its outgoing transitions as `byte->state`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in 0..self.state_count {
            let marker = if self.is_final(state as StateId) { "*" } else { " " };
            write!(f, "{}{:>2}:", marker, state)?;

            for byte in 0..ALPHABET_SIZE {
                let to = self.table[byte][state];
                if to == START_STATE {
                    continue;
                }

                let byte = byte as u8;
                if byte.is_ascii_graphic() {
                    write!(f, " {}->{}", byte as char, to)?;
                } else {
                    write!(f, " {:#04x}->{}", byte, to)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
