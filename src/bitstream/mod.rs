//! The bitstream module forms the I/O subsystem for the huff compressor.
//!
//! Huffman coding works at bit granularity: the tree header and every code in
//! the payload are variable-length bit strings with no byte alignment. The
//! writer packs values MSB-first and zero-pads the final byte; the reader
//! mirrors it and reports end-of-stream through Options so the decoder can
//! distinguish a clean stop from a truncated file.
//!
//! This I/O subsystem is designed to interface with the other modules within
//! huff. It is not intended for more general use.

pub mod bitreader;
pub mod bitwriter;
