use crate::huffman_coding::huffman::{PSEUDO_EOF, SYMBOL_COUNT};

/// Returns a frequency count of the input data over the 257-symbol alphabet.
/// The end-of-stream marker never occurs in real data; it is pre-seeded with
/// a count of 1 so it always earns a place in the tree.
pub fn freqs(data: &[u8]) -> [u32; SYMBOL_COUNT] {
    let mut freqs = [0_u32; SYMBOL_COUNT];
    freqs[PSEUDO_EOF as usize] = 1;
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}
