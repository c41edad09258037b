//! The huffman module is the intellectual core of the huff compressor.
//!
//! huff is a whole-file Huffman coder. One pass over the input produces a
//! frequency table, the table becomes an optimal prefix-code tree, and the
//! tree is serialized ahead of the payload so the decoder can rebuild the
//! exact code book without any side channel.
//!
//! The pieces are:
//! - huffman: tree construction and code-table derivation.
//! - header: pre-order tree serialization and reconstruction.

pub mod header;
pub mod huffman;
