//! Parameter parsing for CSI sequences.
//!
//! CSI parameters are semicolon-separated decimal numbers. An empty
//! parameter defaults to 0. Storage is bounded; parameters beyond the
//! limit are silently dropped.

use std::fmt;

pub const MAX_PARAMS: usize = 32;

#[derive(Clone)]
pub struct Params {
    params: [u16; MAX_PARAMS],
    len: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl Params {
    pub fn new() -> Self {
        Params {
            params: [0; MAX_PARAMS],
            len: 0,
        }
    }

    /// Parse raw parameter bytes (digits and semicolons)
    pub fn parse(bytes: &[u8]) -> Self {
        let mut params = Params::new();
        let mut current: u16 = 0;
        let mut seen_any = false;

        for &byte in bytes {
            match byte {
                b'0'..=b'9' => {
                    current = current
                        .saturating_mul(10)
                        .saturating_add((byte - b'0') as u16);
                    seen_any = true;
                }
                b';' => {
                    params.push(current);
                    current = 0;
                    seen_any = true;
                }
                // Non-numeric bytes are dropped by the state machine
                // before they reach here; skip defensively.
                _ => {}
            }
        }
        if seen_any {
            params.push(current);
        }
        params
    }

    pub fn push(&mut self, value: u16) {
        if self.len < MAX_PARAMS {
            self.params[self.len] = value;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<u16> {
        if index < self.len {
            Some(self.params[index])
        } else {
            None
        }
    }

    pub fn get_or(&self, index: usize, default: u16) -> u16 {
        self.get(index).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.params[..self.len].iter().copied()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
