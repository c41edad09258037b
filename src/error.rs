//! Error types for huff compression and decompression.

use thiserror::Error;

/// Everything that can go wrong while producing or consuming a huff stream.
/// All variants are fatal to the current operation; there is no retry.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The leading 32 bits of the input are not the huff magic number. The
    /// file is not ours (or not compressed at all) and must be rejected.
    #[error("bad magic {found:#010x} (expected {:#010x}), not a huff file", crate::compression::MAGIC)]
    BadMagic { found: u32 },

    /// End of stream hit while the tree header was still being read.
    #[error("unexpected end of stream while reading the tree header")]
    TruncatedHeader,

    /// The tree header was readable but describes an impossible tree.
    #[error("invalid tree header: {0}")]
    InvalidHeader(&'static str),

    /// End of stream hit before the end-of-stream code was decoded. The
    /// payload was cut short or corrupted.
    #[error("unexpected end of stream before the end-of-stream code")]
    TruncatedPayload,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
