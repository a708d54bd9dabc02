use std::fmt;

use crate::{TrieError, get_bit};

/// A borrowed bit string: `len` significant bits read from the start of
/// `bytes`. Trailing bytes past the last significant bit are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> Key<'a> {
    pub fn new(bytes: &'a [u8], len: usize) -> Self {
        Self { bytes, len }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of significant bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rejects empty keys, zero lengths and lengths the bytes can't cover.
    pub fn validate(&self) -> Result<(), TrieError> {
        if self.bytes.is_empty() || self.len == 0 || self.bytes.len() * 8 < self.len {
            return Err(TrieError::InvalidKey {
                bits: self.len,
                bytes: self.bytes.len(),
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub fn bit(&self, i: usize) -> bool {
        get_bit(self.bytes, self.len, i)
    }

    /// Bits in path order, first prefix bit first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let key = *self;
        (0..key.len).rev().map(move |i| key.bit(i))
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.validate().is_err() {
            return write!(f, "<invalid key/{}>", self.len);
        }
        for (pos, bit) in self.bits().enumerate() {
            if pos > 0 && pos % 8 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}
