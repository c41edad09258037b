//! The tools module provides the helper functions for the huff compressor.
//!
//! The tools are:
//! - cli: Command line interface for huff.
//! - freq_count: Frequency count over the 257-symbol alphabet.

pub mod cli;
pub mod freq_count;
