// Copyright (C) 2025 Thom Hayward.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
pub const WORD_LEN: usize = std::mem::size_of::<u32>();

/// Number of words needed to hold `len` bytes.
#[inline]
pub fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_LEN)
}

/// Converts a byte slice to little-endian words.
///
/// A trailing partial word is zero-extended in its high-order bytes.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    let mut words = Vec::with_capacity(word_count(bytes.len()));

    let mut chunks = bytes.chunks_exact(WORD_LEN);
    for word in &mut chunks {
        words.push(u32::from_le_bytes([word[0], word[1], word[2], word[3]]));
    }

    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let mut padded = [0u8; WORD_LEN];
        padded[..remainder.len()].copy_from_slice(remainder);
        words.push(u32::from_le_bytes(padded));
    }

    words
}

/// Converts words back to their little-endian byte representation.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn aligned_nop() {
        assert_eq!(bytes_to_words(&[0x13, 0x00, 0x00, 0x00]), vec![0x00000013]);
    }

    #[test]
    fn short_tail_is_zero_extended() {
        assert_eq!(bytes_to_words(&[0x01, 0x02, 0x03]), vec![0x00030201]);
        assert_eq!(
            bytes_to_words(&[0xef, 0xbe, 0xad, 0xde, 0xff]),
            vec![0xdeadbeef, 0x000000ff]
        );
    }

    #[test]
    fn empty() {
        assert!(bytes_to_words(&[]).is_empty());
        assert_eq!(word_count(0), 0);
    }

    proptest! {
        #[test]
        fn word_count_is_ceil(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(bytes_to_words(&bytes).len(), bytes.len().div_ceil(4));
        }

        #[test]
        fn bytes_survive_repacking(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut repacked = words_to_bytes(&bytes_to_words(&bytes));
            prop_assert!(repacked[bytes.len()..].iter().all(|&b| b == 0));
            repacked.truncate(bytes.len());
            prop_assert_eq!(repacked, bytes);
        }
    }
}
