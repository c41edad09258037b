//! The compression module manages whole files for the huff compressor.
//!
//! A huff stream is laid out as:
//! - Magic: 32 bits identifying the format.
//! - Tree header: the pre-order serialized prefix-code tree.
//! - Payload: one variable-length code per input byte, closed by the
//!   end-of-stream code.
//! - Pad: 0-7 zero bits completing the final byte.
//!
//! Compression is two passes over the (in-memory) input: one to count symbol
//! frequencies, one to emit codes. Decompression is a single pass driven
//! entirely by the reconstructed tree. Both directions are strictly
//! sequential and own all of their state for the duration of one call.

pub mod compress;
pub mod decompress;

/// Fixed constant heading every huff stream.
pub const MAGIC: u32 = 0xFACE_8201;

/// Suffix given to compressed files.
pub const EXTENSION: &str = ".hf";
