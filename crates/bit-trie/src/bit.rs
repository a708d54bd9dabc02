//! Bit addressing for trie keys.
//!
//! Bit `i` of a `len` bit key is counted from the end of the key: bit
//! `len - 1` is the first bit of the prefix and bit `0` the last one. The
//! index is anchored to `len`, so the same `i` names a different prefix
//! position under a different length.

/// Prefix position (0 is the first bit) of bit `i` in a `len` bit key.
#[inline(always)]
pub fn bit_position(len: usize, i: usize) -> usize {
    len - 1 - i
}

/// Bit index of prefix position `pos` in a `len` bit key.
#[inline(always)]
pub fn bit_index(len: usize, pos: usize) -> usize {
    len - 1 - pos
}

/// Returns bit `i` of the `len` bit key stored in `bytes`.
///
/// `bytes` must hold at least `len` bits and `i` must be below `len`.
#[inline(always)]
pub fn get_bit(bytes: &[u8], len: usize, i: usize) -> bool {
    let pos = bit_position(len, i);
    bytes[pos >> 3] & (0x80 >> (pos & 0x07)) != 0
}
