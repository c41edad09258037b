//! huff: a lossless whole-file Huffman compressor.
//!
//! huff reads an arbitrary binary input, counts symbol frequencies, builds an
//! optimal prefix-code tree, writes the tree as a self-describing header, and
//! re-emits the input as bit-packed codes closed by an end-of-stream code.
//! Decompression reverses the process exactly, byte for byte.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huff -z test.txt`
//!
//! This will compress the file and create test.txt.hf. The original file
//! will be deleted (pass -k to keep it). `huff -d test.txt.hf` restores it.
//!
//! The stream layout is: 32-bit magic, pre-order tree header (leaf = `1` +
//! 9-bit symbol, internal = `0` + left + right), per-byte codes, the
//! end-of-stream code, and 0-7 zero pad bits.

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::HuffError;
